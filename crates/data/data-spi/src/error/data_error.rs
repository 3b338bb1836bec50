//! Data error types.

use thiserror::Error;

/// History store errors.
#[derive(Debug, Error)]
pub enum DataError {
    /// Filesystem failure while reading or rewriting the history file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV encoding or decoding failure
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Header does not match the fixed five-column schema
    #[error("Schema mismatch: expected [{expected}], found [{found}]")]
    Schema { expected: String, found: String },

    /// Unparseable timestamp
    #[error("Invalid timestamp: {0}")]
    Timestamp(String),

    /// Column name outside the KPI schema
    #[error("Unknown KPI field: {0}")]
    UnknownField(String),
}

/// Result type for data operations.
pub type Result<T> = std::result::Result<T, DataError>;
