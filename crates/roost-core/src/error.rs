//! Error types for roost.

use thiserror::Error;

/// Result type alias using roost's Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for roost operations.
#[derive(Error, Debug)]
pub enum Error {
    /// A required field is missing, empty, or has the wrong shape
    #[error("{0}")]
    Validation(String),

    /// Record not found
    #[error("{0}")]
    NotFound(String),

    /// Storage adapter could not read or persist a collection
    #[error("Storage error: {0}")]
    Storage(String),

    /// Upload gateway failed to store a file set
    #[error("Upload error: {0}")]
    Upload(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Database operation failed (wraps sqlx::Error)
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// File I/O operation failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Serialization(e.to_string())
    }
}
