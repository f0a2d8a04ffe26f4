use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::shared::AppConfig;

/// CORS layer for the editor SPA
///
/// With `CORS_ALLOWED_ORIGINS` set, only the listed origins are allowed;
/// otherwise any origin is.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let layer = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE]);

    let Some(origins_str) = &config.cors_allowed_origins else {
        return layer.allow_origin(Any);
    };

    let origins: Vec<HeaderValue> = origins_str
        .split(',')
        .filter_map(|s| s.trim().parse().ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("CORS_ALLOWED_ORIGINS had no valid origins; allowing any origin");
        layer.allow_origin(Any)
    } else {
        layer.allow_origin(origins)
    }
}
