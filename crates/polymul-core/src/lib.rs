//! # polymul-core
//!
//! Validated polynomial multiplication: input checks, algorithm routing,
//! cross-checking, and the shared error taxonomy.

pub mod constants;
pub mod error;
pub mod multiply;
pub mod options;

// Re-exports
pub use error::PolyError;
pub use multiply::multiply;
pub use options::{Algorithm, Options};
