//! # polymul-fft
//!
//! Recursive complex-valued FFT and the convolution driver for integer
//! polynomial multiplication.
//!
//! Samples are `f64` complex numbers. Rounding the inverse transform back
//! to integers is exact as long as coefficient magnitudes stay inside the
//! precision budget documented by `polymul-core` (roughly: the worst-case
//! output magnitude `min(len) * max|A| * max|B|` must stay below 2^52).

pub mod convolve;
pub mod fft_core;
pub mod naive;

// Re-exports
pub use convolve::{convolve, convolve_raw};
pub use fft_core::{forward, inverse, padded_len};
