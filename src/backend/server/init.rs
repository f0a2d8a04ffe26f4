/**
 * Server Initialization
 *
 * This module handles the initialization and setup of the Axum HTTP server,
 * including state creation, database loading, and route configuration.
 *
 * # Initialization Process
 *
 * 1. Load the optional database pool (and run migrations)
 * 2. Build the application state from the configuration
 * 3. Create and configure the router
 */

#[cfg(feature = "ssr")]
use axum::Router;

#[cfg(feature = "ssr")]
use crate::backend::routes::router::create_router;
#[cfg(feature = "ssr")]
use crate::backend::server::config::load_database;
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;
#[cfg(feature = "ssr")]
use crate::shared::AppConfig;

/// Create and configure the Axum application
///
/// # Error Handling
///
/// The function is designed to be resilient:
/// - Missing database: Server continues without chat history
/// - Migration failures: Logged but don't prevent startup
/// - Missing API key: Generation runs in demo mode
#[cfg(feature = "ssr")]
pub async fn create_app(config: AppConfig) -> Router<()> {
    tracing::info!("Initializing BlogVerse AI service");

    let db_pool = load_database(config.database_url.as_deref()).await;

    let app_state = AppState::new(config, db_pool);
    if app_state.openrouter.is_live() {
        tracing::info!(model = %app_state.config.openrouter_model, "Live generation enabled");
    } else {
        tracing::warn!("OPENROUTER_API_KEY not set. Generation will return demo content.");
    }

    let app = create_router(app_state);

    tracing::info!("Router configured");

    app
}
