//! # Domain Layer
//!
//! Core types of the chat API, independent of HTTP and storage concerns.
//!
//! - **entities**: `Chat`, `Message` and their repository traits
//! - **value_objects**: `ChatId`, `MessageLimit`

pub mod entities;
pub mod value_objects;

// Re-export commonly used types
pub use entities::*;
pub use value_objects::*;
