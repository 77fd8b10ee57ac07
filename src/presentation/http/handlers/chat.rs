//! Chat Handlers

use axum::{
    body::Bytes,
    extract::{rejection::QueryRejection, Query, State},
    http::StatusCode,
    Json,
};

use crate::application::dto::{ChatDetailResponse, ChatQuery, ChatResponse, CreateChatRequest};
use crate::domain::MessageLimit;
use crate::presentation::http::extractors::{decode_json, ChatIdPath};
use crate::shared::error::AppError;
use crate::startup::AppState;

/// Create a chat
pub async fn create_chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<ChatResponse>), AppError> {
    let request: CreateChatRequest = decode_json(&body, "Invalid request body")?;

    let chat = state
        .chat_service
        .create_chat(request.title.as_deref().unwrap_or_default())
        .await?;

    Ok((StatusCode::CREATED, Json(ChatResponse::from(chat))))
}

/// Get a chat with its most recent messages
pub async fn get_chat(
    State(state): State<AppState>,
    ChatIdPath(chat_id): ChatIdPath,
    query: Result<Query<ChatQuery>, QueryRejection>,
) -> Result<Json<ChatDetailResponse>, AppError> {
    // A malformed query string behaves like a missing limit
    let query = query.map(|Query(q)| q).unwrap_or_default();
    let limit = MessageLimit::from_query(query.limit.as_deref());

    let chat = state.chat_service.get_chat(chat_id, limit).await?;

    Ok(Json(ChatDetailResponse::from(chat)))
}

/// Delete a chat together with its messages
pub async fn delete_chat(
    State(state): State<AppState>,
    ChatIdPath(chat_id): ChatIdPath,
) -> Result<StatusCode, AppError> {
    state.chat_service.delete_chat(chat_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
