//! FFT convolution driver.
//!
//! Pads both coefficient sequences to a common power-of-two length, runs
//! the forward transform on each, multiplies pointwise, inverse-transforms
//! and rounds the real parts back to integers.

use num_complex::Complex64;
use num_traits::Zero;
use tracing::debug;

use crate::fft_core::{forward, inverse, padded_len};

/// Multiply two integer coefficient sequences via FFT convolution.
///
/// Returns the `a.len() + b.len() - 1` product coefficients. Both inputs
/// must be non-empty. Exact up to the f64 precision budget; callers that
/// need the pre-rounding samples use [`convolve_raw`].
#[must_use]
#[allow(clippy::cast_possible_truncation)]
pub fn convolve(a: &[i64], b: &[i64]) -> Vec<i64> {
    let out_len = a.len() + b.len() - 1;
    convolve_raw(a, b)
        .into_iter()
        .take(out_len)
        .map(|sample| sample.re.round() as i64)
        .collect()
}

/// The convolution pipeline stopped just before rounding.
///
/// The output has the full padded transform length and is already divided
/// by n; entries past `a.len() + b.len() - 1` are structurally zero.
/// Exposed so precision diagnostics can measure each sample's distance
/// from the nearest integer.
#[must_use]
pub fn convolve_raw(a: &[i64], b: &[i64]) -> Vec<Complex64> {
    assert!(!a.is_empty() && !b.is_empty(), "inputs must be non-empty");

    let n = padded_len(a.len(), b.len());
    debug!(a_len = a.len(), b_len = b.len(), padded = n, "fft convolution");

    let mut fa = to_samples(a, n);
    let mut fb = to_samples(b, n);

    forward(&mut fa);
    forward(&mut fb);

    let mut c: Vec<Complex64> = fa.iter().zip(&fb).map(|(x, y)| x * y).collect();
    inverse(&mut c);
    c
}

#[allow(clippy::cast_precision_loss)]
fn to_samples(coeffs: &[i64], n: usize) -> Vec<Complex64> {
    let mut samples = Vec::with_capacity(n);
    samples.extend(coeffs.iter().map(|&c| Complex64::new(c as f64, 0.0)));
    samples.resize(n, Complex64::zero());
    samples
}
