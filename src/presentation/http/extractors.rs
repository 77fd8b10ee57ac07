//! Custom Extractors
//!
//! Axum extractors and body decoding that reject with `AppError`, so every
//! malformed request gets the JSON error envelope instead of axum's default
//! plain-text rejection.

use axum::{
    extract::{FromRequestParts, Path},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::domain::ChatId;
use crate::shared::error::AppError;

/// Chat ID taken from the `{id}` path segment
#[derive(Debug, Clone, Copy)]
pub struct ChatIdPath(pub ChatId);

impl<S> FromRequestParts<S> for ChatIdPath
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let invalid = || AppError::BadRequest("Invalid chat ID".into());

        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| invalid())?;

        raw.parse().map(ChatIdPath).map_err(|_| invalid())
    }
}

/// Decode a JSON request body, mapping any failure to a 400 with `message`.
pub fn decode_json<T: DeserializeOwned>(body: &[u8], message: &str) -> Result<T, AppError> {
    serde_json::from_slice(body).map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::BadRequest(message.to_owned())
    })
}
