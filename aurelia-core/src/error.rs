//! Structured error types for the Aurelia toolkit.

use thiserror::Error;

/// Unified error type for all Aurelia operations.
#[derive(Debug, Error)]
pub enum AureliaError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed configuration, table, or record content)
    #[error("parse error: {0}")]
    Parse(String),

    /// A labeled sequence record is absent or never reaches its terminator
    #[error("missing sequence record: {0}")]
    MissingSequence(String),

    /// Invalid input (bad arguments, out-of-range values)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Internal consistency violation — indicates a bug, not a user-input problem
    #[error("internal error: {0}")]
    Internal(String),
}

/// Convenience alias used throughout the Aurelia crates.
pub type Result<T> = std::result::Result<T, AureliaError>;
