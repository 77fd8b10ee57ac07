//! Chat Repository Tests

use pretty_assertions::assert_eq;
use sqlx::PgPool;

use chat_api::domain::{ChatRepository, MessageRepository, NewChat};
use chat_api::infrastructure::repositories::{PgChatRepository, PgMessageRepository};

use super::{at, insert_chat, message_rows, new_message};

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_create_and_find_chat(pool: PgPool) {
    let repo = PgChatRepository::new(pool);

    let chat = repo
        .create(&NewChat {
            title: "Standup".into(),
            created_at: at(5),
        })
        .await
        .unwrap();

    assert!(chat.id > 0);
    assert_eq!(chat.title, "Standup");
    assert_eq!(chat.created_at, at(5));
    assert_eq!(repo.find_by_id(chat.id).await.unwrap(), Some(chat));
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_find_missing_chat_returns_none(pool: PgPool) {
    let repo = PgChatRepository::new(pool);

    assert_eq!(repo.find_by_id(424_242).await.unwrap(), None);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_delete_chat_cascades_to_messages(pool: PgPool) {
    let chats = PgChatRepository::new(pool.clone());
    let messages = PgMessageRepository::new(pool.clone());
    let doomed = insert_chat(&pool, "Doomed").await;
    let kept = insert_chat(&pool, "Kept").await;
    for (i, text) in ["one", "two", "three"].into_iter().enumerate() {
        messages.create(&new_message(doomed.id, text, i as i64)).await.unwrap();
    }
    messages.create(&new_message(kept.id, "stays", 0)).await.unwrap();

    assert_eq!(chats.delete(doomed.id).await.unwrap(), 1);

    assert_eq!(chats.find_by_id(doomed.id).await.unwrap(), None);
    assert_eq!(message_rows(&pool, doomed.id).await, 0);
    assert_eq!(message_rows(&pool, kept.id).await, 1);
}

#[sqlx::test(migrations = "./migrations")]
#[ignore = "requires PostgreSQL via DATABASE_URL"]
async fn test_delete_missing_chat_affects_nothing(pool: PgPool) {
    let repo = PgChatRepository::new(pool.clone());
    let chat = insert_chat(&pool, "Once").await;

    assert_eq!(repo.delete(424_242).await.unwrap(), 0);
    assert_eq!(repo.delete(chat.id).await.unwrap(), 1);
    assert_eq!(repo.delete(chat.id).await.unwrap(), 0);
}
