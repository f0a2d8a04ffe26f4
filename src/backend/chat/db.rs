/**
 * Database Operations for Chat History
 *
 * This module persists the AI composer's chat history to PostgreSQL.
 * The history is an append-only log per user: entries are inserted and
 * listed, never updated or deleted.
 */

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::shared::{ChatMessage, ChatRole, GenerationType, NewChatMessage};

/// Row shape of `chat_messages`
#[derive(Debug, sqlx::FromRow)]
struct ChatMessageRow {
    id: Uuid,
    user_id: Uuid,
    role: String,
    message: String,
    generation_type: Option<String>,
    topic: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<ChatMessageRow> for ChatMessage {
    type Error = sqlx::Error;

    fn try_from(row: ChatMessageRow) -> Result<Self, Self::Error> {
        let role: ChatRole = row
            .role
            .parse()
            .map_err(|e| sqlx::Error::Decode(format!("Invalid role in row {}: {}", row.id, e).into()))?;

        let generation_type = row
            .generation_type
            .as_deref()
            .map(str::parse::<GenerationType>)
            .transpose()
            .map_err(|e| {
                sqlx::Error::Decode(format!("Invalid generation type in row {}: {}", row.id, e).into())
            })?;

        Ok(ChatMessage {
            id: row.id,
            user_id: row.user_id,
            role,
            message: row.message,
            generation_type,
            topic: row.topic,
            created_at: row.created_at,
        })
    }
}

/// Append an entry to a user's chat history
///
/// # Arguments
/// * `pool` - Database connection pool
/// * `user_id` - Owner of the history
/// * `new_message` - Validated entry to store
///
/// # Returns
/// The stored entry with its assigned ID and creation time
pub async fn append_chat_message(
    pool: &PgPool,
    user_id: Uuid,
    new_message: &NewChatMessage,
) -> Result<ChatMessage, sqlx::Error> {
    let row = sqlx::query_as::<_, ChatMessageRow>(
        r#"
        INSERT INTO chat_messages (id, user_id, role, message, generation_type, topic, created_at)
        VALUES ($1, $2, $3, $4, $5, $6, NOW())
        RETURNING id, user_id, role, message, generation_type, topic, created_at
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(new_message.role.as_str())
    .bind(&new_message.message)
    .bind(new_message.generation_type.map(GenerationType::as_str))
    .bind(new_message.normalized_topic())
    .fetch_one(pool)
    .await?;

    row.try_into()
}

/// Load a user's chat history, oldest first
pub async fn list_chat_messages(
    pool: &PgPool,
    user_id: Uuid,
) -> Result<Vec<ChatMessage>, sqlx::Error> {
    let rows = sqlx::query_as::<_, ChatMessageRow>(
        r#"
        SELECT id, user_id, role, message, generation_type, topic, created_at
        FROM chat_messages
        WHERE user_id = $1
        ORDER BY created_at ASC, id ASC
        "#,
    )
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(ChatMessage::try_from).collect()
}
