//! # Domain Entities
//!
//! Core domain entities. Both map directly to their database tables.
//!
//! - **Chat**: a named conversation container
//! - **Message**: a single text entry belonging to exactly one chat
//!
//! Each entity has an associated repository trait defining data access
//! operations. The traits are implemented in the infrastructure layer.

mod chat;
mod message;

pub use chat::{Chat, ChatRepository, NewChat};
pub use message::{Message, MessageRepository, NewMessage};

#[cfg(test)]
pub use chat::MockChatRepository;
#[cfg(test)]
pub use message::MockMessageRepository;
