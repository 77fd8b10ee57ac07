//! Request DTOs
//!
//! Data structures for API request bodies and query strings.

use serde::Deserialize;

/// Create chat request
///
/// Unknown fields are ignored. A missing or `null` title is treated as empty
/// so that it fails title validation rather than JSON decoding.
#[derive(Debug, Default, Deserialize)]
pub struct CreateChatRequest {
    #[serde(default)]
    pub title: Option<String>,
}

/// Send message request
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SendMessageRequest {
    #[serde(default)]
    pub text: Option<String>,
}

/// Query parameters for `GET /chats/{id}`
///
/// `limit` stays a raw string so that bad values fall back to the default
/// instead of rejecting the request.
#[derive(Debug, Default, Deserialize)]
pub struct ChatQuery {
    pub limit: Option<String>,
}
