//! Validation Utilities
//!
//! Free-text fields are trimmed and bound-checked before they reach storage.
//! Lengths are counted in characters, not bytes.

use validator::ValidateLength;

/// Maximum chat title length in characters.
pub const MAX_TITLE_LENGTH: u64 = 200;

/// Maximum message text length in characters.
pub const MAX_TEXT_LENGTH: u64 = 5000;

/// Field-level validation error
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Validate a chat title, returning the trimmed value.
pub fn validate_title(raw: &str) -> Result<String, FieldError> {
    validate_bounded(raw, "title", "Title", MAX_TITLE_LENGTH)
}

/// Validate message text, returning the trimmed value.
pub fn validate_text(raw: &str) -> Result<String, FieldError> {
    validate_bounded(raw, "text", "Text", MAX_TEXT_LENGTH)
}

fn validate_bounded(
    raw: &str,
    field: &'static str,
    label: &str,
    max: u64,
) -> Result<String, FieldError> {
    let trimmed = raw.trim();

    if trimmed.is_empty() {
        return Err(FieldError::new(field, format!("{label} cannot be empty")));
    }

    if !trimmed.validate_length(None, Some(max), None) {
        return Err(FieldError::new(
            field,
            format!("{label} must be {max} characters or less"),
        ));
    }

    Ok(trimmed.to_owned())
}
