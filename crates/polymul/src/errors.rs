//! Error handling and exit codes.

use polymul_core::constants::exit_codes;
use polymul_core::PolyError;

/// Map an application error to its process exit code.
#[must_use]
pub fn exit_code(err: &anyhow::Error) -> i32 {
    match err.downcast_ref::<PolyError>() {
        Some(PolyError::InvalidInput(_)) => exit_codes::ERROR_INVALID_INPUT,
        Some(PolyError::Config(_)) => exit_codes::ERROR_CONFIG,
        Some(PolyError::Mismatch) => exit_codes::ERROR_MISMATCH,
        None => exit_codes::ERROR_GENERIC,
    }
}
