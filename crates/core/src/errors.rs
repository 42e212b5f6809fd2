//! Core error types for the TakaTrack application.
//!
//! This module defines storage-agnostic error types. Backend-specific errors
//! (from SQLite, HTTP transports, etc.) are converted to these types at the
//! crate boundary.

use chrono::ParseError as ChronoParseError;
use std::num::ParseFloatError;
use thiserror::Error;

use crate::goals::GoalError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the analytics layer.
///
/// Storage-specific errors are wrapped in string form to keep this type
/// agnostic of the backing store.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Store operation failed: {0}")]
    Store(#[from] StoreError),

    #[error("API request failed: {0}")]
    Api(#[from] ApiError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Savings goal error: {0}")]
    Goal(#[from] GoalError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Transport-agnostic error taxonomy for backend calls.
///
/// A 401 becomes `SessionExpired` so callers can redirect to login instead
/// of showing the generic failure toast.
#[derive(Error, Debug)]
pub enum ApiError {
    /// The bearer token was rejected with a 401.
    #[error("Session expired, please sign in again")]
    SessionExpired,

    /// Any other non-success HTTP status, with the server-provided
    /// message when one could be decoded.
    #[error("Server returned {status}: {message}")]
    Http { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body did not match the expected shape.
    #[error("Failed to decode response: {0}")]
    Decode(String),
}

/// Backend-agnostic error type for the key-value store.
///
/// This enum uses `String` for all error details, allowing the storage layer
/// to convert driver-specific errors (SQLite, etc.) into this format.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to open or connect to the backing store.
    #[error("Failed to open store: {0}")]
    OpenFailed(String),

    /// A read or write against the store failed.
    #[error("Store query failed: {0}")]
    QueryFailed(String),

    /// The requested key was not found.
    #[error("Key not found: {0}")]
    NotFound(String),

    /// Schema setup or upgrade of the store failed.
    #[error("Store migration failed: {0}")]
    MigrationFailed(String),

    /// Internal/unexpected store error.
    #[error("Internal store error: {0}")]
    Internal(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Failed to parse number: {0}")]
    NumberParse(#[from] ParseFloatError),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Validation(ValidationError::InvalidInput(err.to_string()))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
