//! Response DTOs
//!
//! Data structures for API response bodies. Timestamps serialize as RFC 3339.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::application::services::ChatWithMessages;
use crate::domain::{Chat, Message};

/// Chat response
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

impl From<Chat> for ChatResponse {
    fn from(chat: Chat) -> Self {
        Self {
            id: chat.id,
            title: chat.title,
            created_at: chat.created_at,
        }
    }
}

/// Message response
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub id: i64,
    pub chat_id: i64,
    pub text: String,
    pub created_at: DateTime<Utc>,
}

impl From<Message> for MessageResponse {
    fn from(message: Message) -> Self {
        Self {
            id: message.id,
            chat_id: message.chat_id,
            text: message.text,
            created_at: message.created_at,
        }
    }
}

/// Chat with its most recent messages, oldest first
#[derive(Debug, Serialize)]
pub struct ChatDetailResponse {
    pub id: i64,
    pub title: String,
    pub created_at: DateTime<Utc>,
    pub messages: Vec<MessageResponse>,
}

impl From<ChatWithMessages> for ChatDetailResponse {
    fn from(value: ChatWithMessages) -> Self {
        Self {
            id: value.chat.id,
            title: value.chat.title,
            created_at: value.chat.created_at,
            messages: value.messages.into_iter().map(MessageResponse::from).collect(),
        }
    }
}
