//! Application configuration from CLI flags and environment.

use clap::Parser;

/// polymul — FFT-based integer polynomial multiplication.
///
/// Reads two polynomials from input (two degrees `n m`, then n+1 and m+1
/// whitespace-separated integer coefficients, lowest power first) and
/// prints the degree and coefficients of their product.
#[derive(Parser, Debug)]
#[command(name = "polymul", version, about)]
pub struct AppConfig {
    /// Input file (defaults to stdin).
    #[arg(short, long, env = "POLYMUL_INPUT")]
    pub input: Option<String>,

    /// Output file (the product is still printed to stdout).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Algorithm to use: fft, naive, auto, or both.
    #[arg(long, default_value = "fft", env = "POLYMUL_ALGO")]
    pub algo: String,

    /// Product length below which `auto` uses the schoolbook loop
    /// (0 = built-in default).
    #[arg(long, default_value = "0")]
    pub threshold: usize,

    /// Suppress the degree line (coefficients only).
    #[arg(short, long)]
    pub quiet: bool,

    /// Log algorithm and timing diagnostics to stderr.
    #[arg(short, long)]
    pub verbose: bool,

    /// Print product statistics to stderr.
    #[arg(short, long)]
    pub details: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }
}
