//! Backend Module
//!
//! This module contains all server-side code for the BlogVerse AI service.
//! It provides an Axum HTTP server in front of the content generator and
//! the composer's chat history.
//!
//! This module is only compiled when the `ssr` feature is enabled.
//!
//! # Architecture
//!
//! - **`server`** - Server initialization, application state, database loading
//! - **`routes`** - HTTP route configuration and router assembly
//! - **`ai`** - Prompt builder, OpenRouter client, demo content, handlers
//! - **`chat`** - Chat history persistence and handlers
//! - **`auth`** - JWT token creation and verification
//! - **`middleware`** - Bearer token middleware and CORS
//! - **`error`** - Backend error type and its HTTP mapping
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Server initialization and state
//! ├── routes/         - Route configuration
//! ├── ai/             - Content generation
//! ├── chat/           - Chat history
//! ├── auth/           - JWT sessions
//! ├── middleware/     - Request middleware
//! └── error/          - Error types
//! ```
//!
//! # Generation Flow
//!
//! `POST /api/ai/generate` runs `validate → build-prompt → invoke-model → respond`.
//! Provider failures never reach the handler: the OpenRouter client absorbs
//! them and returns demo content together with the reason it fell back.
//!
//! # State Management
//!
//! `AppState` is read-only after startup: the configuration, one pooled
//! HTTP client and an optional database pool. Requests share nothing
//! mutable, so no locks are involved.

/// Server setup and configuration
#[cfg(feature = "ssr")]
pub mod server;

/// Route configuration
#[cfg(feature = "ssr")]
pub mod routes;

/// AI content generation
#[cfg(feature = "ssr")]
pub mod ai;

/// Chat history persistence
#[cfg(feature = "ssr")]
pub mod chat;

/// Backend error types
#[cfg(feature = "ssr")]
pub mod error;

/// JWT session tokens
#[cfg(feature = "ssr")]
pub mod auth;

/// Middleware for request processing
#[cfg(feature = "ssr")]
pub mod middleware;

/// Re-export commonly used types
#[cfg(feature = "ssr")]
pub use server::create_app;
#[cfg(feature = "ssr")]
pub use error::BackendError;
#[cfg(feature = "ssr")]
pub use ai::openrouter::{FallbackReason, Generation, OpenRouterClient, Outcome};
