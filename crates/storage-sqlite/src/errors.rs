//! Storage-specific error types for SQLite operations.
//!
//! Wraps `rusqlite` errors and converts them to the database-agnostic
//! error types defined in `takatrack_core` at the crate boundary.

use thiserror::Error;

use takatrack_core::errors::StoreError;
use takatrack_core::Error;

/// Errors internal to the storage layer. Converted to
/// `takatrack_core::Error` before being returned to callers.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database connection failed: {0}")]
    ConnectionFailed(String),

    #[error("Query execution failed: {0}")]
    QueryFailed(#[from] rusqlite::Error),

    #[error("Migration failed: {0}")]
    MigrationFailed(String),
}

impl From<StorageError> for Error {
    fn from(err: StorageError) -> Self {
        let store_error = match err {
            StorageError::ConnectionFailed(msg) => StoreError::OpenFailed(msg),
            StorageError::QueryFailed(e) => StoreError::QueryFailed(e.to_string()),
            StorageError::MigrationFailed(msg) => StoreError::MigrationFailed(msg),
        };
        Error::Store(store_error)
    }
}
