//! Error types for the Quill REST API.
//!
//! This module defines all error types used throughout the REST API layer,
//! with automatic conversion to JSON error responses.
//!
//! # Error Mapping
//!
//! Store errors from the persistence layer are automatically mapped to
//! appropriate HTTP status codes:
//!
//! | Store Error | HTTP Status | Error Code |
//! |-------------|-------------|------------|
//! | NotFound | 404 | not-found |
//! | AlreadyExists | 409 | conflict |
//! | InvalidDocument | 400 | invalid |
//! | Connection | 503 | unavailable |
//! | Serialization | 500 | internal |
//! | Internal | 500 | internal |

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use quill_store::StoreError;
use std::fmt;

/// The primary error type for REST API operations.
///
/// Each variant maps cleanly to an HTTP status code and a stable machine
/// readable error code carried in the response body.
#[derive(Debug)]
pub enum ApiError {
    /// Post not found (HTTP 404).
    NotFound {
        /// The post ID.
        id: String,
    },

    /// Bad request - malformed or invalid body (HTTP 400).
    BadRequest {
        /// Error message.
        message: String,
    },

    /// Conflict - a post with the same ID already exists (HTTP 409).
    Conflict {
        /// Error message.
        message: String,
    },

    /// The database is unreachable (HTTP 503).
    Unavailable {
        /// Error message.
        message: String,
    },

    /// Internal server error (HTTP 500).
    Internal {
        /// Error message.
        message: String,
    },
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::NotFound { id } => {
                write!(f, "Post not found: {}", id)
            }
            ApiError::BadRequest { message } => {
                write!(f, "Bad request: {}", message)
            }
            ApiError::Conflict { message } => {
                write!(f, "Conflict: {}", message)
            }
            ApiError::Unavailable { message } => {
                write!(f, "Service unavailable: {}", message)
            }
            ApiError::Internal { message } => {
                write!(f, "Internal error: {}", message)
            }
        }
    }
}

impl std::error::Error for ApiError {}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            ApiError::NotFound { id } => (
                StatusCode::NOT_FOUND,
                "not-found",
                format!("Post {} not found", id),
            ),
            ApiError::BadRequest { message } => {
                (StatusCode::BAD_REQUEST, "invalid", message.clone())
            }
            ApiError::Conflict { message } => (StatusCode::CONFLICT, "conflict", message.clone()),
            ApiError::Unavailable { message } => (
                StatusCode::SERVICE_UNAVAILABLE,
                "unavailable",
                message.clone(),
            ),
            ApiError::Internal { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal",
                message.clone(),
            ),
        };

        let body = serde_json::json!({
            "error": code,
            "message": message,
        });
        (status, Json(body)).into_response()
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { id } => ApiError::NotFound { id },
            StoreError::AlreadyExists { id } => ApiError::Conflict {
                message: format!("Post {} already exists", id),
            },
            StoreError::InvalidDocument { message } => ApiError::BadRequest { message },
            StoreError::Connection { message } => ApiError::Unavailable { message },
            StoreError::Serialization { message } | StoreError::Internal { message } => {
                ApiError::Internal { message }
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::BadRequest {
            message: format!("Invalid JSON: {}", err),
        }
    }
}

/// Result type alias for REST operations.
pub type RestResult<T> = Result<T, ApiError>;
