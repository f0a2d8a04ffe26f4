/**
 * Router Configuration
 *
 * This module provides the main router creation function that combines
 * all route configurations into a single Axum router.
 *
 * # Route Groups
 *
 * 1. Public routes (health)
 * 2. AI routes, wrapped in the bearer token middleware
 * 3. Fallback handler (404 JSON)
 *
 * CORS and request tracing apply to every route.
 */

use axum::{
    http::StatusCode,
    middleware::from_fn_with_state,
    response::IntoResponse,
    Json, Router,
};
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

#[cfg(feature = "ssr")]
use crate::backend::middleware::{auth_middleware, cors_layer};
#[cfg(feature = "ssr")]
use crate::backend::routes::api_routes::{configure_ai_routes, configure_public_routes};
#[cfg(feature = "ssr")]
use crate::backend::server::state::AppState;

/// Create the Axum router with all routes configured
///
/// # Arguments
///
/// * `app_state` - Application state containing configuration and services
///
/// # Returns
///
/// Configured Axum Router ready to serve requests
///
/// # Authentication
///
/// `route_layer` attaches the auth middleware to the AI routes only, so
/// unknown paths still reach the 404 fallback instead of returning 401.
#[cfg(feature = "ssr")]
pub fn create_router(app_state: AppState) -> Router<()> {
    let cors = cors_layer(&app_state.config);

    let protected = configure_ai_routes(Router::new())
        .route_layer(from_fn_with_state(app_state.clone(), auth_middleware));

    let router = configure_public_routes(Router::new())
        .merge(protected)
        .fallback(not_found);

    router
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(app_state)
}

async fn not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "Not found" })),
    )
}
