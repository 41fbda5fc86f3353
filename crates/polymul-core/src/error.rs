//! Error taxonomy for polynomial multiplication.

/// Error type for polynomial multiplication.
#[derive(Debug, thiserror::Error)]
pub enum PolyError {
    /// Input was malformed or outside the supported range.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Configuration error (unknown algorithm name, bad flag value).
    #[error("configuration error: {0}")]
    Config(String),

    /// FFT and schoolbook results disagreed in cross-check mode.
    #[error("result mismatch between algorithms")]
    Mismatch,
}
