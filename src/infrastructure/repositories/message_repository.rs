//! Message Repository Implementation
//!
//! PostgreSQL implementation of message operations.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;

use crate::domain::{Message, MessageRepository, NewMessage};
use crate::shared::error::AppError;

/// PostgreSQL message repository implementation.
pub struct PgMessageRepository {
    pool: PgPool,
}

impl PgMessageRepository {
    /// Creates a new PgMessageRepository with the given connection pool.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Internal row type for message queries.
#[derive(Debug, sqlx::FromRow)]
struct MessageRow {
    id: i64,
    chat_id: i64,
    text: String,
    created_at: DateTime<Utc>,
}

impl From<MessageRow> for Message {
    fn from(row: MessageRow) -> Self {
        Message {
            id: row.id,
            chat_id: row.chat_id,
            text: row.text,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl MessageRepository for PgMessageRepository {
    async fn create(&self, message: &NewMessage) -> Result<Message, AppError> {
        let row = sqlx::query_as::<_, MessageRow>(
            r#"
            INSERT INTO messages (chat_id, text, created_at)
            VALUES ($1, $2, $3)
            RETURNING id, chat_id, text, created_at
            "#,
        )
        .bind(message.chat_id)
        .bind(&message.text)
        .bind(message.created_at)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| match e {
            // Chat deleted after the existence check
            sqlx::Error::Database(ref db) if db.is_foreign_key_violation() => {
                AppError::NotFound("Chat not found".into())
            }
            e => AppError::Database(e),
        })?;

        Ok(row.into())
    }

    /// Newest first; `id` breaks ties between equal timestamps.
    async fn find_latest_by_chat(
        &self,
        chat_id: i64,
        limit: i64,
    ) -> Result<Vec<Message>, AppError> {
        let rows = sqlx::query_as::<_, MessageRow>(
            r#"
            SELECT id, chat_id, text, created_at
            FROM messages
            WHERE chat_id = $1
            ORDER BY created_at DESC, id DESC
            LIMIT $2
            "#,
        )
        .bind(chat_id)
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(Message::from).collect())
    }
}
