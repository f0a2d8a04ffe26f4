/**
 * Application State Management
 *
 * This module defines the application state structure and implements
 * the necessary `FromRef` traits for Axum state extraction.
 *
 * # Architecture
 *
 * `AppState` holds:
 * - The application configuration
 * - The OpenRouter client (one pooled HTTP client for all requests)
 * - The optional database pool
 *
 * Everything is read-only after startup, so no locks are needed; cloning
 * the state only bumps reference counts.
 *
 * # State Extraction
 *
 * The `FromRef` implementations let handlers extract just the part of the
 * state they use, e.g. `State<OpenRouterClient>` or `State<Option<PgPool>>`.
 */

#[cfg(feature = "ssr")]
use axum::extract::FromRef;
#[cfg(feature = "ssr")]
use sqlx::PgPool;
#[cfg(feature = "ssr")]
use std::sync::Arc;

#[cfg(feature = "ssr")]
use crate::backend::ai::openrouter::OpenRouterClient;
#[cfg(feature = "ssr")]
use crate::shared::AppConfig;

/// Application state
///
/// # Fields
///
/// * `config` - Configuration the server was started with
/// * `openrouter` - Client for the content generation provider
/// * `db_pool` - Optional PostgreSQL pool for chat history
#[cfg(feature = "ssr")]
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub openrouter: OpenRouterClient,
    pub db_pool: Option<PgPool>,
}

#[cfg(feature = "ssr")]
impl AppState {
    pub fn new(config: AppConfig, db_pool: Option<PgPool>) -> Self {
        let openrouter = OpenRouterClient::from_config(&config);
        Self {
            config: Arc::new(config),
            openrouter,
            db_pool,
        }
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for Arc<AppConfig> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.config.clone()
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for OpenRouterClient {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.openrouter.clone()
    }
}

#[cfg(feature = "ssr")]
impl FromRef<AppState> for Option<PgPool> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.db_pool.clone()
    }
}
