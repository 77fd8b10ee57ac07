//! Chat identifier parsed from request paths.

use std::fmt;
use std::str::FromStr;

/// A positive chat identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChatId(i64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("chat id must be a positive integer")]
pub struct InvalidChatId;

impl ChatId {
    pub fn new(value: i64) -> Result<Self, InvalidChatId> {
        if value > 0 {
            Ok(Self(value))
        } else {
            Err(InvalidChatId)
        }
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl FromStr for ChatId {
    type Err = InvalidChatId;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<i64>()
            .map_err(|_| InvalidChatId)
            .and_then(Self::new)
    }
}

impl fmt::Display for ChatId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
