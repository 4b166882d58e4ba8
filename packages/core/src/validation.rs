// ABOUTME: Local validation run before any request leaves the device
// ABOUTME: Covers unresolved slots, intensity bounds and empty free-text fields

use thiserror::Error;

use crate::slots::Slot;

pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 10;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please choose or type a value for {0}")]
    UnresolvedSlot(Slot),

    #[error("Emotion intensity must be between 1 and 10, got {0}")]
    IntensityOutOfRange(u8),

    #[error("{0} cannot be empty")]
    EmptyField(&'static str),

    #[error("Unknown communication context: {0}")]
    UnknownContext(String),

    #[error("Nothing to regenerate yet; submit a request first")]
    NothingToRegenerate,
}

/// Returns the trimmed value when it carries any text
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

/// Base note followed by the newer one; either may be absent
pub fn append_note(base: Option<&str>, note: Option<&str>) -> Option<String> {
    match (non_blank(base), non_blank(note)) {
        (Some(base), Some(note)) if base.ends_with(['.', '!', '?']) => {
            Some(format!("{} {}", base, note))
        }
        (Some(base), Some(note)) => Some(format!("{}. {}", base, note)),
        (Some(only), None) | (None, Some(only)) => Some(only.to_string()),
        (None, None) => None,
    }
}

/// Fails with `EmptyField(name)` when `value` is blank
pub fn require_text(name: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::EmptyField(name));
    }
    Ok(())
}

pub fn validate_intensity(intensity: u8) -> Result<(), ValidationError> {
    if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&intensity) {
        return Err(ValidationError::IntensityOutOfRange(intensity));
    }
    Ok(())
}

/// Truncate text to `max_chars` characters for log snippets
pub fn truncate(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => &text[..idx],
        None => text,
    }
}
