//! Chat Repository Implementation
//!
//! PostgreSQL implementation of chat operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Chat, ChatRepository, NewChat};
use crate::shared::error::AppError;

/// PostgreSQL chat repository implementation.
pub struct PgChatRepository {
    pool: PgPool,
}

impl PgChatRepository {
    /// Creates a new PgChatRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for chat queries.
#[derive(Debug, sqlx::FromRow)]
struct ChatRow {
    id: i64,
    title: String,
    created_at: DateTime<Utc>,
}

impl From<ChatRow> for Chat {
    fn from(row: ChatRow) -> Self {
        Chat {
            id: row.id,
            title: row.title,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl ChatRepository for PgChatRepository {
    async fn find_by_id(&self, id: i64) -> Result<Option<Chat>, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            SELECT id, title, created_at
            FROM chats
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(Chat::from))
    }

    async fn create(&self, chat: &NewChat) -> Result<Chat, AppError> {
        let row = sqlx::query_as::<_, ChatRow>(
            r#"
            INSERT INTO chats (title, created_at)
            VALUES ($1, $2)
            RETURNING id, title, created_at
            "#,
        )
        .bind(&chat.title)
        .bind(chat.created_at)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into())
    }

    /// Messages go with the chat through the foreign key's cascade rule.
    async fn delete(&self, id: i64) -> Result<u64, AppError> {
        let result = sqlx::query("DELETE FROM chats WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }
}
