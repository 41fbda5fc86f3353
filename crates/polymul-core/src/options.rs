//! Multiplication options and algorithm selection.

use std::str::FromStr;

use crate::constants::DEFAULT_NAIVE_THRESHOLD;
use crate::error::PolyError;

/// Which convolution routine to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Algorithm {
    /// FFT convolution unconditionally.
    Fft,
    /// Schoolbook convolution unconditionally.
    Naive,
    /// Schoolbook below the routing threshold, FFT above it.
    Auto,
    /// Run both routines and fail on disagreement.
    Both,
}

impl FromStr for Algorithm {
    type Err = PolyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "fft" => Ok(Self::Fft),
            "naive" => Ok(Self::Naive),
            "auto" => Ok(Self::Auto),
            "both" => Ok(Self::Both),
            other => Err(PolyError::Config(format!(
                "unknown algorithm '{other}' (expected fft, naive, auto, or both)"
            ))),
        }
    }
}

/// Options for polynomial multiplication.
#[derive(Debug, Clone)]
pub struct Options {
    /// Convolution routine selection.
    pub algorithm: Algorithm,
    /// Product length below which [`Algorithm::Auto`] uses the schoolbook
    /// loop.
    pub naive_threshold: usize,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::Fft,
            naive_threshold: DEFAULT_NAIVE_THRESHOLD,
        }
    }
}

impl Options {
    /// Normalize options, applying defaults where values are zero.
    #[must_use]
    pub fn normalize(mut self) -> Self {
        if self.naive_threshold == 0 {
            self.naive_threshold = DEFAULT_NAIVE_THRESHOLD;
        }
        self
    }
}
