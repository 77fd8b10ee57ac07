//! Application Services
//!
//! Business logic services that coordinate domain operations.
//!
//! ## Available Services
//!
//! - **ChatService**: Chat creation, retrieval with recent messages, deletion
//! - **MessageService**: Posting messages into existing chats

pub mod chat_service;
pub mod message_service;

pub use chat_service::{ChatService, ChatServiceImpl, ChatWithMessages};
pub use message_service::{MessageService, MessageServiceImpl};
