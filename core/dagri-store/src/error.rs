//! Error types for the storage layer.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Errors that can occur in store operations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Database error from SQLite.
    #[error("database error: {0}")]
    Database(String),

    /// Uniqueness or referential-integrity violation.
    #[error("conflict: {0}")]
    Conflict(String),

    /// Record not found.
    #[error("not found: {0}")]
    NotFound(String),

    /// A stored value could not be decoded into its domain type.
    #[error("invalid data: {0}")]
    InvalidData(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(e: rusqlite::Error) -> Self {
        match &e {
            // UNIQUE and FOREIGN KEY failures both surface as conflicts; the
            // stores add their own message when they pre-check.
            rusqlite::Error::SqliteFailure(err, msg)
                if err.code == rusqlite::ErrorCode::ConstraintViolation =>
            {
                StoreError::Conflict(
                    msg.clone()
                        .unwrap_or_else(|| "constraint violation".to_string()),
                )
            }
            _ => StoreError::Database(e.to_string()),
        }
    }
}
