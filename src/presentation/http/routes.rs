//! Route Configuration
//!
//! Configures all HTTP routes for the API.

use axum::{
    middleware,
    routing::{get, post},
    Router,
};

use super::handlers;
use crate::presentation::middleware::log_requests;
use crate::startup::AppState;

/// Create the main API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(chat_routes())
        .route("/health", get(handlers::health::health_check))
        // Applies to the routes registered above, so it must come after them
        .method_not_allowed_fallback(handlers::method_not_allowed)
        .fallback(handlers::not_found)
        .layer(middleware::from_fn(log_requests))
        .with_state(state)
}

/// Chat and message routes
fn chat_routes() -> Router<AppState> {
    Router::new()
        .route("/chats", post(handlers::chat::create_chat))
        .route(
            "/chats/{id}",
            get(handlers::chat::get_chat).delete(handlers::chat::delete_chat),
        )
        .route("/chats/{id}/messages", post(handlers::message::send_message))
}
