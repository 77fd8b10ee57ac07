//! Message entity and repository trait.
//!
//! Maps to the `messages` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// Represents a message in a chat.
///
/// Maps to the `messages` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - chat_id: BIGINT NOT NULL REFERENCES chats(id) ON DELETE CASCADE
/// - text: VARCHAR(5000) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub id: i64,

    /// Parent chat
    pub chat_id: i64,

    /// Message text (up to 5000 characters)
    pub text: String,

    pub created_at: DateTime<Utc>,
}

/// A message that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMessage {
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Message data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MessageRepository: Send + Sync {
    /// Insert a new message.
    ///
    /// Fails with `AppError::NotFound` if the parent chat no longer exists.
    async fn create(&self, message: &NewMessage) -> Result<Message, AppError>;

    /// Find the newest `limit` messages of a chat, newest first.
    async fn find_latest_by_chat(&self, chat_id: i64, limit: i64)
        -> Result<Vec<Message>, AppError>;
}
