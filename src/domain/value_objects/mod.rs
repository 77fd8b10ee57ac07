//! # Domain Value Objects
//!
//! Immutable value types that represent domain concepts without identity.
//!
//! - **ChatId**: positive chat identifier taken from request paths
//! - **MessageLimit**: bounded number of messages returned with a chat

mod chat_id;
mod message_limit;

pub use chat_id::*;
pub use message_limit::*;
