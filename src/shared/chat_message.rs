//! Chat History Records
//!
//! The AI composer keeps an append-only log of the exchange between a user
//! and the generator. Records are never updated or deleted; they are listed
//! in creation order.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::shared::error::SharedError;
use crate::shared::generation::GenerationType;

/// Longest message body accepted into the history
pub const MAX_MESSAGE_LEN: usize = 20_000;

/// Who authored a chat history entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// The person using the composer
    User,
    /// The generator
    Assistant,
}

impl ChatRole {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Assistant => "assistant",
        }
    }
}

impl fmt::Display for ChatRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ChatRole {
    type Err = SharedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "user" => Ok(Self::User),
            "assistant" => Ok(Self::Assistant),
            other => Err(SharedError::validation(
                "role",
                format!("Unknown role '{}'", other),
            )),
        }
    }
}

/// A persisted chat history entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Unique entry ID
    pub id: Uuid,
    /// Owner of the history
    pub user_id: Uuid,
    /// Author of this entry
    pub role: ChatRole,
    /// Message body (topic for user entries, generated text for assistant entries)
    pub message: String,
    /// Generation type the entry relates to, if any
    pub generation_type: Option<GenerationType>,
    /// Topic the entry relates to, if any
    pub topic: Option<String>,
    /// Creation time; defines list order
    pub created_at: DateTime<Utc>,
}

/// Body of `POST /api/ai/chat-messages`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewChatMessage {
    pub role: ChatRole,
    pub message: String,
    #[serde(default)]
    pub generation_type: Option<GenerationType>,
    #[serde(default)]
    pub topic: Option<String>,
}

impl NewChatMessage {
    /// Check the body before it is written to the log
    pub fn validate(&self) -> Result<(), SharedError> {
        if self.message.trim().is_empty() {
            return Err(SharedError::validation("message", "Message cannot be empty"));
        }
        if self.message.len() > MAX_MESSAGE_LEN {
            return Err(SharedError::validation(
                "message",
                format!("Message must be at most {} bytes", MAX_MESSAGE_LEN),
            ));
        }
        Ok(())
    }

    /// Topic with surrounding whitespace removed; blank topics become `None`
    pub fn normalized_topic(&self) -> Option<String> {
        self.topic
            .as_deref()
            .map(str::trim)
            .filter(|topic| !topic.is_empty())
            .map(str::to_string)
    }
}

/// Body of `GET /api/ai/chat-messages`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistoryResponse {
    pub messages: Vec<ChatMessage>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn new_message(message: &str) -> NewChatMessage {
        NewChatMessage {
            role: ChatRole::User,
            message: message.to_string(),
            generation_type: None,
            topic: None,
        }
    }

    #[test]
    fn test_validate_rejects_blank_message() {
        assert_matches!(
            new_message("   ").validate(),
            Err(SharedError::ValidationError { field, .. }) if field == "message"
        );
    }

    #[test]
    fn test_validate_rejects_oversized_message() {
        let body = "a".repeat(MAX_MESSAGE_LEN + 1);
        assert!(new_message(&body).validate().is_err());
    }

    #[test]
    fn test_validate_accepts_message() {
        assert!(new_message("Write about tide pools").validate().is_ok());
    }

    #[test]
    fn test_normalized_topic() {
        let mut body = new_message("hi");
        body.topic = Some("  Rust  ".to_string());
        assert_eq!(body.normalized_topic().as_deref(), Some("Rust"));

        body.topic = Some("   ".to_string());
        assert_eq!(body.normalized_topic(), None);
    }

    #[test]
    fn test_deserialize_camel_case_body() {
        let body: NewChatMessage = serde_json::from_str(
            r#"{"role":"assistant","message":"Draft","generationType":"outline","topic":"Bees"}"#,
        )
        .unwrap();

        assert_eq!(body.role, ChatRole::Assistant);
        assert_eq!(body.generation_type, Some(GenerationType::Outline));
        assert_eq!(body.topic.as_deref(), Some("Bees"));
    }

    #[test]
    fn test_deserialize_rejects_unknown_role() {
        let result: Result<NewChatMessage, _> =
            serde_json::from_str(r#"{"role":"system","message":"x"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_role_from_str() {
        assert_eq!("user".parse::<ChatRole>().unwrap(), ChatRole::User);
        assert!("system".parse::<ChatRole>().is_err());
    }
}
