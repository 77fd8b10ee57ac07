//! Message Handlers

use axum::{body::Bytes, extract::State, http::StatusCode, Json};

use crate::application::dto::{MessageResponse, SendMessageRequest};
use crate::presentation::http::extractors::{decode_json, ChatIdPath};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Send message to chat
///
/// The parent chat is looked up before the body is decoded, so a missing chat
/// is reported as 404 even when the body is also invalid.
pub async fn send_message(
    State(state): State<AppState>,
    ChatIdPath(chat_id): ChatIdPath,
    body: Bytes,
) -> Result<(StatusCode, Json<MessageResponse>), AppError> {
    state.message_service.ensure_chat_exists(chat_id).await?;

    let request: SendMessageRequest = decode_json(&body, "Invalid JSON")?;

    let message = state
        .message_service
        .send_message(chat_id, request.text.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(MessageResponse::from(message))))
}
