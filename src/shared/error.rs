//! Shared Error Types
//!
//! This module defines error types that are shared between the client-facing
//! payload types and the backend.
//!
//! # Error Categories
//!
//! - `SerializationError` - JSON serialization/deserialization failures
//! - `ValidationError` - Payload validation failures
//! - `UnknownGenerationType` - A generation type outside the closed set
//!
//! # Usage
//!
//! ```rust
//! use blogverse::shared::error::SharedError;
//!
//! let error = SharedError::validation("message", "Message cannot be empty");
//! ```
use thiserror::Error;

/// Shared error types that can occur in both client and backend code
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SharedError {
    /// JSON serialization or deserialization error
    #[error("Serialization error: {message}")]
    SerializationError {
        /// Human-readable error message
        message: String,
    },

    /// Data validation error
    #[error("Validation error in field '{field}': {message}")]
    ValidationError {
        /// The field that failed validation
        field: String,
        /// Human-readable error message
        message: String,
    },

    /// Generation type string outside the six recognized values
    #[error("Unknown generation type: {value}")]
    UnknownGenerationType {
        /// The rejected value, as received
        value: String,
    },
}

impl SharedError {
    /// Create a new serialization error
    pub fn serialization(message: impl Into<String>) -> Self {
        Self::SerializationError {
            message: message.into(),
        }
    }

    /// Create a new validation error
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ValidationError {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a new unknown generation type error
    pub fn unknown_generation_type(value: impl Into<String>) -> Self {
        Self::UnknownGenerationType {
            value: value.into(),
        }
    }
}

impl From<serde_json::Error> for SharedError {
    fn from(err: serde_json::Error) -> Self {
        Self::serialization(format!("JSON error: {}", err))
    }
}
