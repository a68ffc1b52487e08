//! Structured error types for the anemone workspace.

use thiserror::Error;

/// Unified error type for all anemone operations.
#[derive(Debug, Error)]
pub enum AnemoneError {
    /// Invalid input (empty sequence, bad k-mer size, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Two operands that cannot be combined (e.g. counters with different k)
    #[error("incompatible operands: {0}")]
    IncompatibleOperands(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the anemone workspace.
pub type Result<T> = std::result::Result<T, AnemoneError>;
