//! Error types and the crate-wide `Result` alias.

pub use ticz_error::{TiczError, ValidationError};

/// Result type alias for Ticz operations
pub type Result<T> = anyhow::Result<T>;
