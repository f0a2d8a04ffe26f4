//! Common test utilities and helpers
//!
//! - App builders for demo, live and database-backed configurations
//! - Database fixtures
//! - Authentication helpers
//! - Request/response helpers driving the router with `oneshot`

#![allow(dead_code)]

pub mod auth_helpers;
pub mod database;

pub use auth_helpers::*;
pub use database::*;

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use blogverse::backend::server::create_app;
use blogverse::shared::{AppConfig, AppConfigBuilder};
use serde_json::Value;
use tower::ServiceExt;

/// Configuration every test app starts from
pub fn test_config() -> AppConfigBuilder {
    AppConfig::builder().jwt_secret(TEST_JWT_SECRET)
}

/// App without an API key or database
pub async fn demo_app() -> Router {
    create_app(test_config().build().expect("valid test config")).await
}

/// App pointed at a mock provider
pub async fn live_app(base_url: &str) -> Router {
    let config = test_config()
        .openrouter_api_key("test-key")
        .openrouter_base_url(base_url)
        .build()
        .expect("valid test config");
    create_app(config).await
}

/// App backed by the test database
pub async fn database_app() -> Router {
    let config = test_config()
        .database_url(test_database_url())
        .build()
        .expect("valid test config");
    create_app(config).await
}

/// Build a JSON request, optionally with a bearer token
pub fn json_request(method: Method, uri: &str, token: Option<&str>, body: impl Into<Body>) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, auth_header(token));
    }
    builder.body(body.into()).expect("valid request")
}

/// POST a JSON value
pub fn post_json(uri: &str, token: Option<&str>, body: &Value) -> Request<Body> {
    json_request(Method::POST, uri, token, body.to_string())
}

/// GET without a body
pub fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    json_request(Method::GET, uri, token, Body::empty())
}

/// Send a request and decode the JSON response body
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.expect("router is infallible");
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).expect("JSON body")
    };
    (status, json)
}
