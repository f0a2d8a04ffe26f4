//! BlogVerse - AI Service Library
//!
//! BlogVerse is a multi-tenant blogging platform. This crate contains the
//! backend slice behind the AI-assisted article editor: content generation
//! through OpenRouter with a deterministic demo fallback, the composer's chat
//! history, and markdown rendering for generated drafts.
//!
//! # Module Structure
//!
//! - **`shared`** - Types shared between the editor client and the server
//!   - Generation types, token budgets, request/response payloads
//!   - Chat history records
//!   - Markdown-to-HTML rendering
//!   - Configuration and error types
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server and route configuration
//!   - JWT verification middleware
//!   - Prompt builder, OpenRouter client, demo content generator
//!   - Chat history persistence (PostgreSQL)
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the server binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use blogverse::backend::server::init::create_app;
//! use blogverse::shared::AppConfig;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = AppConfig::from_env()?;
//! let app = create_app(config).await;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Demo Mode
//!
//! When `OPENROUTER_API_KEY` is not configured, or the provider call fails,
//! generation falls back to static templated content. Callers always receive
//! a complete response; the `demo` flag tells them which path produced it.

/// Shared types and data structures
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
