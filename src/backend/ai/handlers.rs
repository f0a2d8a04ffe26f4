/**
 * AI Route Handlers
 *
 * `POST /api/ai/generate` runs validate → build-prompt → invoke-model →
 * respond. Provider failures are absorbed by the OpenRouter client, so the
 * only 500 comes from the generation task itself failing.
 *
 * `POST /api/ai/render` converts a generated markdown draft to HTML for the
 * editor's apply action.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::future::Future;

use crate::backend::ai::openrouter::{Generation, OpenRouterClient};
use crate::backend::ai::prompts::professional_prompt;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::{markdown, GenerationRequest, GenerationResponse, GenerationType, SharedError};

const MISSING_FIELDS: &str = "Prompt and type are required";

/// Raw generate body; fields are checked by [`validate_generate_body`]
///
/// `type` is kept as raw JSON so a present non-string value can be told
/// apart from a missing one.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateBody {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<Value>,
}

/// Turn a raw body into a typed request
///
/// Missing, null or blank fields are reported before the type name is
/// checked. The type name must match exactly.
pub fn validate_generate_body(body: GenerateBody) -> Result<GenerationRequest, BackendError> {
    let prompt = body
        .prompt
        .filter(|prompt| !prompt.trim().is_empty())
        .ok_or_else(|| BackendError::bad_request(MISSING_FIELDS))?;

    let kind: GenerationType = match body.kind {
        None | Some(Value::Null) => return Err(BackendError::bad_request(MISSING_FIELDS)),
        Some(Value::String(raw)) if raw.trim().is_empty() => {
            return Err(BackendError::bad_request(MISSING_FIELDS))
        }
        Some(Value::String(raw)) => raw.parse()?,
        Some(other) => return Err(SharedError::unknown_generation_type(other.to_string()).into()),
    };

    Ok(GenerationRequest { prompt, kind })
}

/// Run one generation on its own task
///
/// A task that panics or is cancelled becomes a 500 with the join error
/// as `details`.
pub async fn run_generation<F>(work: F) -> Result<Generation, BackendError>
where
    F: Future<Output = Generation> + Send + 'static,
{
    tokio::spawn(work)
        .await
        .map_err(|e| BackendError::internal("Failed to generate content", e.to_string()))
}

/// Generate content (POST /api/ai/generate)
///
/// # Errors
///
/// * `400 Bad Request` - Missing fields, malformed body or unknown type
/// * `401 Unauthorized` - Missing or invalid bearer token (middleware)
/// * `500 Internal Server Error` - The generation task failed
pub async fn generate_content(
    State(client): State<OpenRouterClient>,
    AuthUser(user): AuthUser,
    body: Result<Json<GenerateBody>, JsonRejection>,
) -> Result<Json<GenerationResponse>, BackendError> {
    let Json(body) = body.map_err(|rejection| {
        tracing::warn!(user_id = %user.user_id, error = %rejection, "Rejected generate body");
        BackendError::bad_request(MISSING_FIELDS)
    })?;

    let request = validate_generate_body(body).inspect_err(|err| {
        tracing::warn!(user_id = %user.user_id, error = %err.message(), "Invalid generate request");
    })?;

    tracing::info!(
        user_id = %user.user_id,
        generation_type = %request.kind,
        "Generating content"
    );

    let kind = request.kind;
    let generation = run_generation(async move {
        let messages = professional_prompt(&request.prompt, request.kind).into_messages();
        client
            .generate(&messages, request.kind.max_tokens(), request.kind, &request.prompt)
            .await
    })
    .await?;

    Ok(Json(GenerationResponse {
        text: generation.text,
        kind,
        timestamp: Utc::now(),
        demo: generation.outcome.is_fallback(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct RenderBody {
    #[serde(default)]
    pub markdown: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RenderResponse {
    pub html: String,
}

/// Render markdown to HTML (POST /api/ai/render)
pub async fn render_markdown(
    AuthUser(_user): AuthUser,
    body: Result<Json<RenderBody>, JsonRejection>,
) -> Result<Json<RenderResponse>, BackendError> {
    let markdown_text = body
        .ok()
        .and_then(|Json(body)| body.markdown)
        .ok_or_else(|| BackendError::bad_request("Markdown is required"))?;

    Ok(Json(RenderResponse {
        html: markdown::to_html(&markdown_text),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::StatusCode;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn body(prompt: Option<&str>, kind: Option<&str>) -> GenerateBody {
        GenerateBody {
            prompt: prompt.map(str::to_string),
            kind: kind.map(|kind| Value::String(kind.to_string())),
        }
    }

    async fn exploding_generation() -> Generation {
        panic!("generation exploded")
    }

    #[test]
    fn test_valid_body() {
        let request = validate_generate_body(body(Some("Bees"), Some("title"))).unwrap();
        assert_eq!(request.prompt, "Bees");
        assert_eq!(request.kind, GenerationType::Title);
    }

    #[test]
    fn test_missing_or_blank_fields() {
        for (prompt, kind) in [
            (None, Some("title")),
            (Some("Bees"), None),
            (Some("   "), Some("title")),
            (Some("Bees"), Some("")),
            (None, None),
        ] {
            let err = validate_generate_body(body(prompt, kind)).unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "Prompt and type are required");
        }
    }

    #[test]
    fn test_unknown_type() {
        let err = validate_generate_body(body(Some("Bees"), Some("bogus"))).unwrap_err();
        assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(err.message(), "Invalid generation type");
    }

    #[test]
    fn test_type_is_not_trimmed_or_case_folded() {
        for raw in [" title ", "Title", "TITLE"] {
            let err = validate_generate_body(body(Some("Bees"), Some(raw))).unwrap_err();
            assert_eq!(err.message(), "Invalid generation type", "{raw:?}");
        }
    }

    #[test]
    fn test_non_string_type() {
        for kind in [json!(5), json!(true), json!(["title"]), json!({ "type": "title" })] {
            let err = validate_generate_body(GenerateBody {
                prompt: Some("Bees".to_string()),
                kind: Some(kind),
            })
            .unwrap_err();
            assert_eq!(err.status_code(), StatusCode::BAD_REQUEST);
            assert_eq!(err.message(), "Invalid generation type");
        }
    }

    #[test]
    fn test_null_type_is_missing() {
        let err = validate_generate_body(GenerateBody {
            prompt: Some("Bees".to_string()),
            kind: Some(Value::Null),
        })
        .unwrap_err();
        assert_eq!(err.message(), "Prompt and type are required");
    }

    #[tokio::test]
    async fn test_panicking_generation_is_internal_error() {
        let err = run_generation(exploding_generation()).await.unwrap_err();
        assert_eq!(err.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.message(), "Failed to generate content");
        assert!(err.details().is_some_and(|details| details.contains("panic")));
    }

    #[tokio::test]
    async fn test_completed_generation_passes_through() {
        let generation = run_generation(async {
            Generation {
                text: "done".to_string(),
                outcome: crate::backend::ai::openrouter::Outcome::Live,
            }
        })
        .await
        .unwrap();
        assert_eq!(generation.text, "done");
    }

    #[test]
    fn test_missing_fields_checked_before_type() {
        let err = validate_generate_body(body(None, Some("bogus"))).unwrap_err();
        assert_eq!(err.message(), "Prompt and type are required");
    }

    #[test]
    fn test_body_deserializes_type_field() {
        let parsed: GenerateBody =
            serde_json::from_str(r#"{"prompt":"X","type":"meta"}"#).unwrap();
        assert_eq!(parsed.kind, Some(json!("meta")));

        let numeric: GenerateBody = serde_json::from_str(r#"{"prompt":"X","type":5}"#).unwrap();
        assert_eq!(numeric.kind, Some(json!(5)));

        let nulls: GenerateBody = serde_json::from_str(r#"{"prompt":null}"#).unwrap();
        assert!(nulls.prompt.is_none());
        assert!(nulls.kind.is_none());
    }
}
