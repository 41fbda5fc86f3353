//! Validated multiplication entry point with algorithm routing.

use tracing::{debug, warn};

use polymul_fft::naive;

use crate::constants::{MAX_COEFF_LEN, PRECISION_BUDGET};
use crate::error::PolyError;
use crate::options::{Algorithm, Options};

/// Multiply two integer coefficient sequences.
///
/// Validates the inputs, warns when the worst-case output magnitude
/// exceeds the f64 precision budget, and routes to the routine selected by
/// `opts`. The result always has length `a.len() + b.len() - 1`.
pub fn multiply(a: &[i64], b: &[i64], opts: &Options) -> Result<Vec<i64>, PolyError> {
    validate(a, b)?;
    check_precision_budget(a, b);

    let out_len = a.len() + b.len() - 1;
    match opts.algorithm {
        Algorithm::Naive => Ok(naive::convolve(a, b)),
        Algorithm::Fft => Ok(polymul_fft::convolve(a, b)),
        Algorithm::Auto => {
            if out_len < opts.naive_threshold {
                debug!(out_len, threshold = opts.naive_threshold, "routing to schoolbook");
                Ok(naive::convolve(a, b))
            } else {
                debug!(out_len, threshold = opts.naive_threshold, "routing to fft");
                Ok(polymul_fft::convolve(a, b))
            }
        }
        Algorithm::Both => {
            let via_fft = polymul_fft::convolve(a, b);
            let via_naive = naive::convolve(a, b);
            if via_fft != via_naive {
                return Err(PolyError::Mismatch);
            }
            Ok(via_fft)
        }
    }
}

fn validate(a: &[i64], b: &[i64]) -> Result<(), PolyError> {
    if a.is_empty() || b.is_empty() {
        return Err(PolyError::InvalidInput(
            "coefficient sequences must be non-empty".into(),
        ));
    }
    for (name, seq) in [("A", a), ("B", b)] {
        if seq.len() > MAX_COEFF_LEN {
            return Err(PolyError::InvalidInput(format!(
                "polynomial {name} has {} coefficients, maximum supported is {MAX_COEFF_LEN}",
                seq.len()
            )));
        }
    }
    Ok(())
}

/// Warn when `min(len)·max|A|·max|B|` can exceed the precision budget.
#[allow(clippy::cast_precision_loss)]
fn check_precision_budget(a: &[i64], b: &[i64]) {
    let max_a = a.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0) as f64;
    let max_b = b.iter().map(|c| c.unsigned_abs()).max().unwrap_or(0) as f64;
    let terms = a.len().min(b.len()) as f64;
    let bound = terms * max_a * max_b;
    if bound > PRECISION_BUDGET {
        warn!(
            bound,
            budget = PRECISION_BUDGET,
            "worst-case coefficient magnitude exceeds the f64 precision budget; \
             rounding may be incorrect"
        );
    }
}
