//! Message Service
//!
//! Handles posting messages into existing chats.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::{ChatId, ChatRepository, Message, MessageRepository, NewMessage};
use crate::shared::error::AppError;
use crate::shared::validation::validate_text;

/// Message service trait
#[async_trait]
pub trait MessageService: Send + Sync {
    /// Fail with `NotFound` unless the chat exists
    async fn ensure_chat_exists(&self, chat_id: ChatId) -> Result<(), AppError>;

    /// Validate and store a message in a chat
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<Message, AppError>;
}

/// MessageService implementation
pub struct MessageServiceImpl {
    chat_repo: Arc<dyn ChatRepository>,
    message_repo: Arc<dyn MessageRepository>,
}

impl MessageServiceImpl {
    pub fn new(chat_repo: Arc<dyn ChatRepository>, message_repo: Arc<dyn MessageRepository>) -> Self {
        Self {
            chat_repo,
            message_repo,
        }
    }
}

#[async_trait]
impl MessageService for MessageServiceImpl {
    async fn ensure_chat_exists(&self, chat_id: ChatId) -> Result<(), AppError> {
        self.chat_repo
            .find_by_id(chat_id.get())
            .await?
            .map(|_| ())
            .ok_or_else(|| AppError::NotFound("Chat not found".into()))
    }

    /// The parent chat is expected to have been checked with
    /// `ensure_chat_exists`; a chat removed in between still surfaces as
    /// `NotFound` from the repository.
    async fn send_message(&self, chat_id: ChatId, text: &str) -> Result<Message, AppError> {
        let text = validate_text(text)?;

        let message = self
            .message_repo
            .create(&NewMessage {
                chat_id: chat_id.get(),
                text,
                created_at: Utc::now(),
            })
            .await?;

        tracing::debug!(chat_id = message.chat_id, message_id = message.id, "Message created");
        Ok(message)
    }
}
