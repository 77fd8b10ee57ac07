//! Message Limit
//!
//! Bounded number of messages returned with a chat.

/// Number of messages returned when no usable limit is given.
pub const DEFAULT_MESSAGE_LIMIT: i64 = 20;

/// Largest accepted limit.
pub const MAX_MESSAGE_LIMIT: i64 = 100;

/// A message limit in `1..=MAX_MESSAGE_LIMIT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MessageLimit(i64);

impl MessageLimit {
    /// Accept a value only if it lies in the allowed range.
    pub fn new(value: i64) -> Option<Self> {
        (1..=MAX_MESSAGE_LIMIT).contains(&value).then_some(Self(value))
    }

    /// Interpret a raw `limit` query value.
    ///
    /// Anything missing, unparsable or out of range falls back to the default
    /// instead of being rejected.
    pub fn from_query(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<i64>().ok())
            .and_then(Self::new)
            .unwrap_or_default()
    }

    pub fn get(self) -> i64 {
        self.0
    }
}

impl Default for MessageLimit {
    fn default() -> Self {
        Self(DEFAULT_MESSAGE_LIMIT)
    }
}
