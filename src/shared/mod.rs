//! Shared Module
//!
//! This module contains types and data structures that are shared between
//! the editor client and the backend. All types are designed for JSON
//! serialization over the REST API.

/// Generation types, token budgets and generation payloads
pub mod generation;

/// Persisted chat history records
pub mod chat_message;

/// Markdown-to-HTML rendering for generated drafts
pub mod markdown;

/// Shared error types
pub mod error;

/// Application configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use generation::{GenerationRequest, GenerationResponse, GenerationType};
pub use chat_message::{ChatMessage, ChatRole, NewChatMessage};
pub use error::SharedError;
pub use config::{AppConfig, AppConfigBuilder, ConfigError};
