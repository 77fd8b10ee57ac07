//! HTTP Handlers
//!
//! Request handlers for all HTTP endpoints.

pub mod chat;
pub mod health;
pub mod message;

use crate::shared::error::AppError;

/// Fallback for unmatched routes
pub async fn not_found() -> AppError {
    AppError::NotFound("Not found".into())
}

/// Fallback for known paths hit with an unsupported method
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
