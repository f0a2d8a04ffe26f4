/**
 * OpenRouter Client
 *
 * Performs a single chat-completion call per generation. Every failure
 * (missing key, non-2xx status, transport error, unusable body) resolves to
 * the demo text for the same `(prompt, type)`, so callers always get text
 * back. The reason is kept in [`Outcome`] and logged, never shown to users.
 */

use reqwest::Client;
use serde::Deserialize;
use serde_json::json;
use thiserror::Error;

use crate::backend::ai::demo::demo_content;
use crate::backend::ai::prompts::PromptMessage;
use crate::shared::{AppConfig, GenerationType};

const TEMPERATURE: f64 = 0.7;
const REFERER: &str = "https://blogverse.app";
const APP_TITLE: &str = "BlogVerse";

/// Why a generation used demo content
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FallbackReason {
    MissingApiKey,
    HttpStatus(u16),
    Transport(String),
    InvalidResponse(String),
}

/// How a generation was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Live,
    Fallback(FallbackReason),
}

impl Outcome {
    pub fn is_fallback(&self) -> bool {
        matches!(self, Outcome::Fallback(_))
    }
}

/// Generated text together with how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub text: String,
    pub outcome: Outcome,
}

/// Failure of one provider call
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("OpenRouter API key is not configured")]
    MissingApiKey,

    #[error("OpenRouter returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Request to OpenRouter failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unusable OpenRouter response: {0}")]
    InvalidResponse(String),
}

impl From<ProviderError> for FallbackReason {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::MissingApiKey => FallbackReason::MissingApiKey,
            ProviderError::Status { status, .. } => FallbackReason::HttpStatus(status),
            ProviderError::Transport(e) => FallbackReason::Transport(e.to_string()),
            ProviderError::InvalidResponse(msg) => FallbackReason::InvalidResponse(msg),
        }
    }
}

#[derive(Debug, Deserialize)]
struct CompletionResponse {
    #[serde(default)]
    choices: Vec<CompletionChoice>,
}

#[derive(Debug, Deserialize)]
struct CompletionChoice {
    message: CompletionMessage,
}

#[derive(Debug, Deserialize)]
struct CompletionMessage {
    #[serde(default)]
    content: Option<String>,
}

/// Client for the OpenRouter chat-completions API
#[derive(Debug, Clone)]
pub struct OpenRouterClient {
    http: Client,
    base_url: String,
    api_key: Option<String>,
    model: String,
}

impl OpenRouterClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: Option<String>,
        model: impl Into<String>,
    ) -> Self {
        let http = Client::builder()
            .user_agent(concat!("blogverse/", env!("CARGO_PKG_VERSION")))
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.filter(|key| !key.trim().is_empty()),
            model: model.into(),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(
            config.openrouter_base_url.clone(),
            config.openrouter_api_key.clone(),
            config.openrouter_model.clone(),
        )
    }

    /// Whether an API key is configured
    pub fn is_live(&self) -> bool {
        self.api_key.is_some()
    }

    /// Generate text for a prompt, falling back to demo content on any failure
    pub async fn generate(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
        kind: GenerationType,
        prompt: &str,
    ) -> Generation {
        match self.request_completion(messages, max_tokens).await {
            Ok(text) => {
                tracing::info!(generation_type = %kind, model = %self.model, "Generated content");
                Generation {
                    text,
                    outcome: Outcome::Live,
                }
            }
            Err(err) => {
                let error = err.to_string();
                let reason = FallbackReason::from(err);
                tracing::warn!(
                    generation_type = %kind,
                    reason = ?reason,
                    error = %error,
                    "Using demo content"
                );
                Generation {
                    text: demo_content(prompt, kind),
                    outcome: Outcome::Fallback(reason),
                }
            }
        }
    }

    async fn request_completion(
        &self,
        messages: &[PromptMessage],
        max_tokens: u32,
    ) -> Result<String, ProviderError> {
        let api_key = self.api_key.as_deref().ok_or(ProviderError::MissingApiKey)?;

        let body = json!({
            "model": self.model,
            "messages": messages,
            "max_tokens": max_tokens,
            "temperature": TEMPERATURE,
        });

        let response = self
            .http
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .header("HTTP-Referer", REFERER)
            .header("X-Title", APP_TITLE)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ProviderError::Status {
                status: status.as_u16(),
                body,
            });
        }

        let completion: CompletionResponse = response
            .json()
            .await
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let text = completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .map(|content| content.trim().to_string())
            .unwrap_or_default();

        if text.is_empty() {
            return Err(ProviderError::InvalidResponse(
                "completion contained no text".to_string(),
            ));
        }

        Ok(text)
    }
}
