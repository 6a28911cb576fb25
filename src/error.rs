//! Error types for Shelfmark

use thiserror::Error;

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    /// A stored entry could not be parsed into a book record.
    #[error("Malformed record in catalog store: {0}")]
    MalformedRecord(#[source] serde_json::Error),

    /// The catalog store exists but could not be read.
    #[error("Failed to read catalog store: {0}")]
    StorageRead(#[source] std::io::Error),

    /// The catalog store content is not a sequence of records.
    #[error("Corrupt catalog store: {0}")]
    CorruptStore(#[source] serde_json::Error),

    /// The catalog store could not be rewritten.
    #[error("Failed to write catalog store: {0}")]
    StorageWrite(#[source] std::io::Error),

    /// The in-memory records could not be serialized.
    #[error("Failed to encode catalog records: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;
