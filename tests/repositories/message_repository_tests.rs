//! Message Repository Tests

use pretty_assertions::assert_eq;
use sqlx::PgPool;

use chat_api::domain::MessageRepository;
use chat_api::infrastructure::repositories::PgMessageRepository;
use chat_api::shared::error::AppError;

use super::{at, insert_chat, message_rows, new_message};

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_create_message_returns_stored_row(pool: PgPool) {
    let repo = PgMessageRepository::new(pool.clone());
    let chat = insert_chat(&pool, "General").await;

    let message = repo.create(&new_message(chat.id, "hello", 1)).await.unwrap();

    assert!(message.id > 0);
    assert_eq!(message.chat_id, chat.id);
    assert_eq!(message.text, "hello");
    assert_eq!(message.created_at, at(1));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_create_message_for_missing_chat_is_not_found(pool: PgPool) {
    let repo = PgMessageRepository::new(pool.clone());

    let result = repo.create(&new_message(424_242, "orphan", 0)).await;

    assert!(
        matches!(result, Err(AppError::NotFound(ref msg)) if msg == "Chat not found"),
        "{result:?}"
    );
    assert_eq!(message_rows(&pool, 424_242).await, 0);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_latest_messages_newest_first_with_tie_break(pool: PgPool) {
    let repo = PgMessageRepository::new(pool.clone());
    let chat = insert_chat(&pool, "Busy").await;
    let other = insert_chat(&pool, "Other").await;

    let oldest = repo.create(&new_message(chat.id, "oldest", 0)).await.unwrap();
    let tie_first = repo.create(&new_message(chat.id, "tie a", 10)).await.unwrap();
    let tie_second = repo.create(&new_message(chat.id, "tie b", 10)).await.unwrap();
    let newest = repo.create(&new_message(chat.id, "newest", 20)).await.unwrap();
    repo.create(&new_message(other.id, "elsewhere", 30)).await.unwrap();

    let latest = repo.find_latest_by_chat(chat.id, 3).await.unwrap();
    let ids: Vec<i64> = latest.iter().map(|m| m.id).collect();
    assert_eq!(ids, vec![newest.id, tie_second.id, tie_first.id]);

    let all = repo.find_latest_by_chat(chat.id, 100).await.unwrap();
    assert_eq!(all.len(), 4);
    assert_eq!(all.last().map(|m| m.id), Some(oldest.id));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_latest_messages_of_empty_chat(pool: PgPool) {
    let repo = PgMessageRepository::new(pool.clone());
    let chat = insert_chat(&pool, "Quiet").await;

    assert!(repo.find_latest_by_chat(chat.id, 20).await.unwrap().is_empty());
}
