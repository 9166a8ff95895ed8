//! Messaging API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{Conversation, Message, MessageSend};
use crate::db::repository::ConversationRepository;
use crate::utils::{AppError, AppResult, time};

/// Send a message, creating the conversation on first contact
pub async fn send(
    State(state): State<ServerState>,
    Json(payload): Json<MessageSend>,
) -> AppResult<Json<Message>> {
    if payload.text.trim().is_empty() {
        return Err(AppError::validation("Message text is required"));
    }
    if payload.from == payload.to {
        return Err(AppError::validation("Cannot message yourself"));
    }

    let repo = ConversationRepository::new(state.get_db());
    let now = time::now_millis();

    let conversation = match repo.find_between(&payload.from, &payload.to).await? {
        Some(existing) => existing,
        None => repo.create(&payload.from, &payload.to, now).await?,
    };

    let message = repo
        .append_message(&conversation, &payload.from, &payload.to, &payload.text, now)
        .await?;
    Ok(Json(message))
}

/// Conversations one employee participates in, most recent first
pub async fn conversations(
    State(state): State<ServerState>,
    Path(employee_id): Path<String>,
) -> AppResult<Json<Vec<Conversation>>> {
    let repo = ConversationRepository::new(state.get_db());
    let conversations = repo.find_for_employee(&employee_id).await?;
    Ok(Json(conversations))
}

/// Messages of a conversation, oldest first
pub async fn messages(
    State(state): State<ServerState>,
    Path(conversation_id): Path<String>,
) -> AppResult<Json<Vec<Message>>> {
    let repo = ConversationRepository::new(state.get_db());
    let messages = repo.find_messages(&conversation_id).await?;
    Ok(Json(messages))
}

/// Reset one participant's unread counter
pub async fn mark_read(
    State(state): State<ServerState>,
    Path((conversation_id, employee_id)): Path<(String, String)>,
) -> AppResult<Json<bool>> {
    let repo = ConversationRepository::new(state.get_db());
    repo.mark_read(&conversation_id, &employee_id).await?;
    Ok(Json(true))
}
