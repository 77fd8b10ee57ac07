//! Chat entity and repository trait.
//!
//! Maps to the `chats` table in the database schema.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::error::AppError;

/// A named conversation container.
///
/// Maps to the `chats` table:
/// - id: BIGSERIAL PRIMARY KEY
/// - title: VARCHAR(200) NOT NULL
/// - created_at: TIMESTAMPTZ NOT NULL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A chat that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewChat {
    /// Already validated and trimmed
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// Repository trait for Chat data access operations.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatRepository: Send + Sync {
    /// Find a chat by its ID.
    async fn find_by_id(&self, id: i64) -> Result<Option<Chat>, AppError>;

    /// Insert a new chat and return the stored row.
    async fn create(&self, chat: &NewChat) -> Result<Chat, AppError>;

    /// Delete a chat by ID, returning the number of rows affected.
    ///
    /// Dependent messages are removed by the `ON DELETE CASCADE` rule.
    async fn delete(&self, id: i64) -> Result<u64, AppError>;
}
