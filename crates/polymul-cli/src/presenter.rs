//! CLI result presenter.

use std::time::Duration;

use crate::output::{format_coefficient_line, format_duration};

/// Presents multiplication results in the batch output format.
///
/// The degree line and coefficient line go to stdout; diagnostics go to
/// stderr so they never corrupt the machine-readable output.
pub struct CLIResultPresenter {
    verbose: bool,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    /// Print the product: degree line, then coefficient line.
    pub fn present_result(
        &self,
        algorithm: &str,
        coeffs: &[i64],
        duration: Duration,
        details: bool,
    ) {
        let degree = coeffs.len().saturating_sub(1);

        if self.verbose {
            eprintln!("Algorithm: {algorithm}");
            eprintln!("Duration: {}", format_duration(duration));
        }
        if details {
            let max_magnitude = coeffs.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0);
            eprintln!("Product degree: {degree}");
            eprintln!("Largest |coefficient|: {max_magnitude}");
        }

        if !self.quiet {
            println!("{degree}");
        }
        println!("{}", format_coefficient_line(coeffs));
    }

    /// Print an error.
    pub fn present_error(&self, error: &str) {
        eprintln!("Error: {error}");
    }
}
