//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufReader};
use std::time::Instant;

use anyhow::{Context, Result};

use polymul_cli::completion::generate_completion;
use polymul_cli::output::write_to_file;
use polymul_cli::presenter::CLIResultPresenter;
use polymul_core::multiply::multiply;
use polymul_core::options::{Algorithm, Options};

use crate::config::AppConfig;
use crate::input::read_polynomials;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    let algorithm: Algorithm = config.algo.parse()?;
    let opts = Options {
        algorithm,
        naive_threshold: config.threshold,
    }
    .normalize();

    let (a, b) = read_input(config)?;
    tracing::debug!(a_len = a.len(), b_len = b.len(), "parsed input polynomials");

    let start = Instant::now();
    let product = multiply(&a, &b, &opts)?;
    let duration = start.elapsed();

    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    presenter.present_result(&config.algo, &product, duration, config.details);

    if let Some(ref path) = config.output {
        write_to_file(path, product.len() - 1, &product)
            .with_context(|| format!("failed to write output to {path}"))?;
    }

    Ok(())
}

fn read_input(config: &AppConfig) -> Result<(Vec<i64>, Vec<i64>)> {
    match config.input {
        Some(ref path) => {
            let file =
                File::open(path).with_context(|| format!("failed to open input file {path}"))?;
            let mut reader = BufReader::new(file);
            Ok(read_polynomials(&mut reader)?)
        }
        None => {
            let stdin = io::stdin();
            let mut lock = stdin.lock();
            Ok(read_polynomials(&mut lock)?)
        }
    }
}
