//! Structured error types for the maftag workspace.

use thiserror::Error;

/// Unified error type for all maftag operations.
#[derive(Debug, Error)]
pub enum MaftagError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed input data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the maftag workspace.
pub type Result<T> = std::result::Result<T, MaftagError>;
