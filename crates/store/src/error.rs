//! Error types for the persistence layer.

// Error enum variant fields are self-documenting via their #[error(...)] messages
#![allow(missing_docs)]

use thiserror::Error;

/// The primary error type for all store operations.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The requested post was not found.
    #[error("post not found: {id}")]
    NotFound { id: String },

    /// A post with the given ID already exists.
    #[error("post already exists: {id}")]
    AlreadyExists { id: String },

    /// The document failed validation before it reached the backend.
    #[error("invalid document: {message}")]
    InvalidDocument { message: String },

    /// Connecting to the backing database failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Serialization/deserialization of a stored document failed.
    #[error("serialization error: {message}")]
    Serialization { message: String },

    /// Internal backend error.
    #[error("internal storage error: {message}")]
    Internal { message: String },
}

/// Result type alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization {
            message: err.to_string(),
        }
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Internal {
            message: err.to_string(),
        }
    }
}

impl From<r2d2::Error> for StoreError {
    fn from(err: r2d2::Error) -> Self {
        StoreError::Connection {
            message: err.to_string(),
        }
    }
}
