//! News post rules.

use crate::fields::require_text;

pub const MAX_POST_TITLE_LENGTH: usize = 200;
pub const MAX_POST_DESCRIPTION_LENGTH: usize = 50_000;

pub fn validate_post_title(title: &str) -> Result<(), String> {
    require_text("Post title", title, MAX_POST_TITLE_LENGTH)
}

pub fn validate_post_description(description: &str) -> Result<(), String> {
    require_text("Post body", description, MAX_POST_DESCRIPTION_LENGTH)
}
