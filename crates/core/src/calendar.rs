//! Calendar event rules.

use crate::fields::{limit_text, require_text};

pub const MAX_EVENT_TITLE_LENGTH: usize = 100;
pub const MAX_EVENT_TEXT_LENGTH: usize = 5_000;

pub fn validate_event_title(title: &str) -> Result<(), String> {
    require_text("Event name", title, MAX_EVENT_TITLE_LENGTH)
}

/// Validate the free-text description and location of an event.
pub fn validate_event_text(field: &str, value: &str) -> Result<(), String> {
    limit_text(field, value, MAX_EVENT_TEXT_LENGTH)
}
