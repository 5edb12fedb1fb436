//! Static page rules.
//!
//! Pages are addressed by a `uri` unique within their space, using the same
//! character set as space slugs.

use crate::fields::{limit_text, require_text, validate_url_key};

pub const MAX_PAGE_TITLE_LENGTH: usize = 100;
pub const MAX_PAGE_URI_LENGTH: usize = 50;
pub const MAX_PAGE_CONTENT_LENGTH: usize = 100_000;

pub fn validate_page_title(title: &str) -> Result<(), String> {
    require_text("Page title", title, MAX_PAGE_TITLE_LENGTH)
}

pub fn validate_page_uri(uri: &str) -> Result<(), String> {
    validate_url_key("page uri", uri, MAX_PAGE_URI_LENGTH)
}

pub fn validate_page_content(content: &str) -> Result<(), String> {
    limit_text("Page content", content, MAX_PAGE_CONTENT_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uri_uses_slug_charset() {
        assert!(validate_page_uri("about_us").is_ok());
        assert!(validate_page_uri("about-us").is_err());
        assert!(validate_page_uri(&"a".repeat(51)).is_err());
    }

    #[test]
    fn content_may_be_empty() {
        assert!(validate_page_content("").is_ok());
        assert!(validate_page_title("").is_err());
    }
}
