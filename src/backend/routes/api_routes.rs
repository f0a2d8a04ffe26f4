/**
 * API Route Configuration
 *
 * # Routes
 *
 * ## Public
 * - `GET /api/health` - Service status and generation mode
 *
 * ## AI (bearer token required)
 * - `POST /api/ai/generate` - Generate content for a topic
 * - `POST /api/ai/render` - Render a markdown draft to HTML
 * - `POST /api/ai/chat-messages` - Append to the composer's chat history
 * - `GET /api/ai/chat-messages` - List the composer's chat history
 */

use axum::{extract::State, routing::{get, post}, Json, Router};
use serde::{Deserialize, Serialize};

#[cfg(feature = "ssr")]
use crate::backend::ai::handlers::{generate_content, render_markdown};
#[cfg(feature = "ssr")]
use crate::backend::chat::handlers::{create_chat_message, list_chat_messages};
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Body of `GET /api/health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub mode: String,
    pub database: bool,
}

/// Report service status (GET /api/health)
#[cfg(feature = "ssr")]
pub async fn get_health(State(app_state): State<AppState>) -> Json<HealthResponse> {
    let mode = if app_state.openrouter.is_live() { "live" } else { "demo" };
    Json(HealthResponse {
        status: "ok".to_string(),
        mode: mode.to_string(),
        database: app_state.db_pool.is_some(),
    })
}

/// Configure routes that need no authentication
#[cfg(feature = "ssr")]
pub fn configure_public_routes(router: Router<AppState>) -> Router<AppState> {
    router.route("/api/health", get(get_health))
}

/// Configure the AI routes
///
/// The caller wraps these in the auth middleware; handlers read the
/// caller through the `AuthUser` extractor.
#[cfg(feature = "ssr")]
pub fn configure_ai_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/api/ai/generate", post(generate_content))
        .route("/api/ai/render", post(render_markdown))
        .route(
            "/api/ai/chat-messages",
            post(create_chat_message).get(list_chat_messages),
        )
}
