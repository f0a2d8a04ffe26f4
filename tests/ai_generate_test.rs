//! Content generation API tests
//!
//! Drives `POST /api/ai/generate` through the full router: auth middleware,
//! body validation, prompt building and the OpenRouter client.

#![cfg(feature = "ssr")]

mod common;

use axum::http::StatusCode;
use blogverse::backend::ai::demo_content;
use blogverse::shared::GenerationType;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[tokio::test]
async fn test_demo_generation_for_title() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": "title" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["demo"], json!(true));
    assert_eq!(body["type"], json!("title"));
    assert!(body["text"].as_str().unwrap().contains("X"));
    assert!(body["timestamp"].as_str().is_some());
}

#[tokio::test]
async fn test_demo_generation_matches_demo_generator() {
    let token = any_user_token();
    for kind in GenerationType::ALL {
        let (status, body) = send(
            demo_app().await,
            post_json(
                "/api/ai/generate",
                Some(&token),
                &json!({ "prompt": "Sourdough baking", "type": kind.as_str() }),
            ),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["text"], json!(demo_content("Sourdough baking", kind)));
    }
}

#[tokio::test]
async fn test_missing_type_is_rejected() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Prompt and type are required"));
}

#[tokio::test]
async fn test_blank_prompt_is_rejected() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "  ", "type": "meta" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Prompt and type are required"));
}

#[tokio::test]
async fn test_unknown_type_is_rejected() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": "bogus" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid generation type"));
}

#[tokio::test]
async fn test_padded_type_is_rejected() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": " title " })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Invalid generation type"));
}

#[tokio::test]
async fn test_non_string_type_is_rejected() {
    let token = any_user_token();
    for kind in [json!(5), json!(false), json!(["title"])] {
        let (status, body) = send(
            demo_app().await,
            post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": kind })),
        )
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], json!("Invalid generation type"));
    }
}

#[tokio::test]
async fn test_null_type_is_missing() {
    let token = any_user_token();
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": null })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Prompt and type are required"));
}

#[tokio::test]
async fn test_malformed_body_is_rejected() {
    let token = any_user_token();
    let request = json_request(
        axum::http::Method::POST,
        "/api/ai/generate",
        Some(&token),
        "{not json",
    );
    let (status, body) = send(demo_app().await, request).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], json!("Prompt and type are required"));
}

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (status, body) = send(
        demo_app().await,
        post_json("/api/ai/generate", None, &json!({ "prompt": "X", "type": "title" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], json!("Authentication required"));
}

#[tokio::test]
async fn test_token_with_wrong_secret_is_unauthorized() {
    let token = blogverse::backend::auth::create_token(uuid::Uuid::new_v4(), "a@b.c", "other-secret")
        .unwrap();
    let (status, _) = send(
        demo_app().await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "X", "type": "title" })),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_live_generation_uses_provider() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .and(body_partial_json(json!({ "max_tokens": 150, "temperature": 0.7 })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "\nFresh bread, simply explained.\n" } }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let token = any_user_token();
    let (status, body) = send(
        live_app(&server.uri()).await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "Bread", "type": "meta" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["demo"], json!(false));
    assert_eq!(body["text"], json!("Fresh bread, simply explained."));
}

#[tokio::test]
async fn test_provider_outage_still_returns_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let token = any_user_token();
    let (status, body) = send(
        live_app(&server.uri()).await,
        post_json("/api/ai/generate", Some(&token), &json!({ "prompt": "Bread", "type": "outline" })),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["demo"], json!(true));
    assert_eq!(body["text"], json!(demo_content("Bread", GenerationType::Outline)));
}
