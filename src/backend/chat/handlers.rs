/**
 * Chat History Handlers
 *
 * `POST /api/ai/chat-messages` appends an entry to the caller's history and
 * `GET /api/ai/chat-messages` lists it oldest first. Bodies are validated
 * before the database is consulted, so a missing pool never hides a 400.
 */

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use sqlx::PgPool;

use crate::backend::chat::db;
use crate::backend::error::BackendError;
use crate::backend::middleware::AuthUser;
use crate::shared::chat_message::ChatHistoryResponse;
use crate::shared::{ChatMessage, NewChatMessage};

fn require_pool(pool: Option<PgPool>) -> Result<PgPool, BackendError> {
    pool.ok_or_else(|| {
        tracing::warn!("Chat history requested but no database is configured");
        BackendError::service_unavailable("Database not configured")
    })
}

/// Append a chat history entry (POST /api/ai/chat-messages)
///
/// # Errors
///
/// * `400 Bad Request` - Malformed body, unknown role or type, blank message
/// * `503 Service Unavailable` - No database configured
/// * `500 Internal Server Error` - Database failure
pub async fn create_chat_message(
    State(db_pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
    body: Result<Json<NewChatMessage>, JsonRejection>,
) -> Result<(StatusCode, Json<ChatMessage>), BackendError> {
    let Json(new_message) = body.map_err(|rejection| {
        tracing::warn!(user_id = %user.user_id, error = %rejection, "Rejected chat message body");
        BackendError::bad_request("Invalid chat message")
    })?;
    new_message.validate()?;

    let pool = require_pool(db_pool)?;
    let stored = db::append_chat_message(&pool, user.user_id, &new_message).await?;

    tracing::info!(
        user_id = %user.user_id,
        message_id = %stored.id,
        role = %stored.role,
        "Stored chat message"
    );

    Ok((StatusCode::CREATED, Json(stored)))
}

/// List the caller's chat history (GET /api/ai/chat-messages)
pub async fn list_chat_messages(
    State(db_pool): State<Option<PgPool>>,
    AuthUser(user): AuthUser,
) -> Result<Json<ChatHistoryResponse>, BackendError> {
    let pool = require_pool(db_pool)?;
    let messages = db::list_chat_messages(&pool, user.user_id).await?;

    tracing::debug!(user_id = %user.user_id, count = messages.len(), "Loaded chat history");

    Ok(Json(ChatHistoryResponse { messages }))
}
