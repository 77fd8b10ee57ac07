//! PostgreSQL Repository Tests
//!
//! Each test gets a fresh database with the migrations applied. They need a
//! running PostgreSQL reachable through `DATABASE_URL` and are ignored by
//! default; run them with `cargo test -- --ignored`.

mod chat_repository_tests;
mod message_repository_tests;

use chrono::{DateTime, TimeZone, Utc};
use sqlx::PgPool;

use chat_api::domain::{Chat, ChatRepository, NewChat, NewMessage};
use chat_api::infrastructure::repositories::PgChatRepository;

/// Fixed timestamp `secs` seconds after a base instant
pub fn at(secs: i64) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap() + chrono::Duration::seconds(secs)
}

pub async fn insert_chat(pool: &PgPool, title: &str) -> Chat {
    PgChatRepository::new(pool.clone())
        .create(&NewChat {
            title: title.into(),
            created_at: at(0),
        })
        .await
        .unwrap()
}

pub fn new_message(chat_id: i64, text: &str, secs: i64) -> NewMessage {
    NewMessage {
        chat_id,
        text: text.into(),
        created_at: at(secs),
    }
}

pub async fn message_rows(pool: &PgPool, chat_id: i64) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM messages WHERE chat_id = $1")
        .bind(chat_id)
        .fetch_one(pool)
        .await
        .unwrap()
}
