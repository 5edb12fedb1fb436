//! Field-level validation helpers shared by every module.
//!
//! All functions return `Err(String)` with a human-readable message; the
//! HTTP layer turns that into a `400 BAD_REQUEST`.

use std::sync::LazyLock;

use regex::Regex;

/// Characters allowed in URL identifiers (space slugs, page uris).
pub const URL_KEY_PATTERN: &str = r"^[a-z0-9_]+$";

static URL_KEY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(URL_KEY_PATTERN).expect("valid regex"));

/// Validate a required text field: non-blank and at most `max_len` characters.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.trim().is_empty() {
        return Err(format!("{field} cannot be empty"));
    }
    limit_text(field, value, max_len)
}

/// Validate an optional text field: at most `max_len` characters.
pub fn limit_text(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    if value.chars().count() > max_len {
        return Err(format!(
            "{field} exceeds maximum length of {max_len} characters"
        ));
    }
    Ok(())
}

/// Validate a URL identifier: lowercase letters, digits and underscore only.
pub fn validate_url_key(field: &str, value: &str, max_len: usize) -> Result<(), String> {
    require_text(field, value, max_len)?;
    if !URL_KEY_RE.is_match(value) {
        return Err(format!(
            "Invalid characters in {field}. Valid characters are lowercase letters, digits and underscore"
        ));
    }
    Ok(())
}
