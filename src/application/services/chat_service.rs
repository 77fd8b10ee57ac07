//! Chat Service
//!
//! Handles chat creation, retrieval with recent messages, and deletion.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{Chat, ChatId, ChatRepository, Message, MessageLimit, MessageRepository, NewChat};
use crate::shared::error::AppError;
use crate::shared::validation::validate_title;

/// Chat service trait
#[async_trait]
pub trait ChatService: Send + Sync {
    /// Create a chat from a raw, unvalidated title
    async fn create_chat(&self, title: &str) -> Result<Chat, AppError>;

    /// Get a chat with its newest messages in chronological order
    async fn get_chat(&self, id: ChatId, limit: MessageLimit) -> Result<ChatWithMessages, AppError>;

    /// Delete a chat and, through the storage cascade, its messages
    async fn delete_chat(&self, id: ChatId) -> Result<(), AppError>;
}

/// A chat together with the tail of its message history.
#[derive(Debug, Clone)]
pub struct ChatWithMessages {
    pub chat: Chat,
    /// Oldest first
    pub messages: Vec<Message>,
}

/// ChatService implementation
pub struct ChatServiceImpl {
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,
}

impl ChatServiceImpl {
    pub fn new(chat_repo: Arc<dyn ChatRepository>, message_repo: Arc<dyn MessageRepository>) -> Self {
        Self {
            chat_repo,
            message_repo,
        }
    }
}

#[async_trait]
impl ChatService for ChatServiceImpl {
    async fn create_chat(&self, title: &str) -> Result<Chat, AppError> {
        let title = validate_title(title)?;

        let chat = self
            .chat_repo
            .create(&NewChat {
                title,
                created_at: Utc::now(),
            })
            .await?;

        tracing::debug!(chat_id = chat.id, "Chat created");
        Ok(chat)
    }

    async fn get_chat(&self, id: ChatId, limit: MessageLimit) -> Result<ChatWithMessages, AppError> {
        let chat = self
            .chat_repo
            .find_by_id(id.get())
            .await?
            .ok_or_else(|| AppError::NotFound("Chat not found".into()))?;

        // Storage returns the tail newest-first
        let mut messages = self
            .message_repo
            .find_latest_by_chat(id.get(), limit.get())
            .await?;
        messages.reverse();

        Ok(ChatWithMessages { chat, messages })
    }

    async fn delete_chat(&self, id: ChatId) -> Result<(), AppError> {
        let affected = self.chat_repo.delete(id.get()).await?;
        if affected == 0 {
            return Err(AppError::NotFound("Chat not found".into()));
        }

        tracing::debug!(chat_id = %id, "Chat deleted");
        Ok(())
    }
}
