//! Middleware Module
//!
//! This module contains HTTP middleware for the backend server.
//!
//! - **`auth`** - Bearer token verification for the AI routes
//! - **`cors`** - CORS policy for the editor SPA

pub mod auth;
pub mod cors;

pub use auth::{auth_middleware, authenticate, AuthUser, AuthenticatedUser};
pub use cors::cors_layer;
