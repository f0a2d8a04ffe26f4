/**
 * Backend Error Types
 *
 * This module defines error types specific to the backend server.
 * These errors are used in HTTP handlers and can be converted to HTTP responses.
 *
 * # Error Categories
 *
 * ## Handler Errors
 *
 * Handler errors occur when processing HTTP requests:
 * - Missing or invalid request fields
 * - Missing or invalid bearer tokens
 * - Services that are not configured
 *
 * ## Internal Errors
 *
 * Internal errors carry a generic user-facing message plus `details`
 * describing the underlying failure.
 *
 * ## Database Errors
 *
 * Database errors are logged in full and reported as a generic 500.
 */

use thiserror::Error;
use axum::http::StatusCode;
use crate::shared::SharedError;

/// Backend-specific error types
///
/// This enum represents all possible errors that can occur in the backend.
/// Each variant can be converted to an HTTP response.
///
/// # Usage
///
/// ```rust
/// use blogverse::backend::error::BackendError;
///
/// let err = BackendError::bad_request("Prompt and type are required");
/// let err = BackendError::internal("Failed to generate content", "task panicked");
/// ```
#[derive(Debug, Error)]
pub enum BackendError {
    /// Handler error (e.g., invalid request, missing token)
    #[error("Handler error: {message}")]
    HandlerError {
        /// HTTP status code for this error
        status: StatusCode,
        /// Human-readable error message
        message: String,
    },

    /// Unexpected failure while serving an otherwise valid request
    #[error("Internal error: {message} ({details})")]
    InternalError {
        /// Generic message shown to the caller
        message: String,
        /// Description of the underlying failure
        details: String,
    },

    /// Shared error (from shared module)
    #[error(transparent)]
    SharedError(#[from] SharedError),

    /// Database error
    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl BackendError {
    /// Create a new handler error with a status code
    pub fn handler(status: StatusCode, message: impl Into<String>) -> Self {
        Self::HandlerError {
            status,
            message: message.into(),
        }
    }

    /// Create a 400 Bad Request error
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::BAD_REQUEST, message)
    }

    /// Create a 401 Unauthorized error
    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::UNAUTHORIZED, message)
    }

    /// Create a 503 Service Unavailable error
    pub fn service_unavailable(message: impl Into<String>) -> Self {
        Self::handler(StatusCode::SERVICE_UNAVAILABLE, message)
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>, details: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
            details: details.into(),
        }
    }

    /// Get the HTTP status code for this error
    ///
    /// # Status Code Mapping
    ///
    /// - `HandlerError` - Uses the status code from the error
    /// - `InternalError` - 500 Internal Server Error
    /// - `SharedError` - 400 for validation failures, 500 otherwise
    /// - `DatabaseError` - 500 Internal Server Error
    /// - `SerializationError` - 500 Internal Server Error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::HandlerError { status, .. } => *status,
            Self::InternalError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SharedError(err) => match err {
                SharedError::SerializationError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
                SharedError::ValidationError { .. } => StatusCode::BAD_REQUEST,
                SharedError::UnknownGenerationType { .. } => StatusCode::BAD_REQUEST,
            },
            Self::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::SerializationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Get the user-facing error message
    pub fn message(&self) -> String {
        match self {
            Self::HandlerError { message, .. } => message.clone(),
            Self::InternalError { message, .. } => message.clone(),
            Self::SharedError(SharedError::ValidationError { message, .. }) => message.clone(),
            Self::SharedError(SharedError::UnknownGenerationType { .. }) => {
                "Invalid generation type".to_string()
            }
            Self::SharedError(err) => err.to_string(),
            Self::DatabaseError(_) => "Database error".to_string(),
            Self::SerializationError(err) => err.to_string(),
        }
    }

    /// Get the details attached to an internal error
    pub fn details(&self) -> Option<&str> {
        match self {
            Self::InternalError { details, .. } => Some(details),
            _ => None,
        }
    }
}
