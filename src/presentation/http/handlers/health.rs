//! Health Check Handler
//!
//! `GET /health` answers with a plain-text `OK` while the process is serving.

use axum::{http::header, response::IntoResponse};

/// Basic health check endpoint
pub async fn health_check() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "text/plain")], "OK")
}
