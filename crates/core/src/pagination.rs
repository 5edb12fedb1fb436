//! Page-number pagination helpers.
//!
//! List endpoints take a 1-based `page` query parameter; repositories take
//! `LIMIT`/`OFFSET`.

/// Largest page number accepted, to keep offsets bounded.
pub const MAX_PAGE: i64 = 10_000;

/// Clamp a requested 1-based page number into `1..=MAX_PAGE`.
pub fn clamp_page(page: Option<i64>) -> i64 {
    page.unwrap_or(1).clamp(1, MAX_PAGE)
}

/// Row offset of a 1-based page.
pub fn page_offset(page: i64, per_page: i64) -> i64 {
    (clamp_page(Some(page)) - 1) * per_page
}

/// Number of pages needed for `total` rows (at least one).
pub fn page_count(total: i64, per_page: i64) -> i64 {
    if total <= 0 {
        1
    } else {
        (total + per_page - 1) / per_page
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamps_out_of_range_pages() {
        assert_eq!(clamp_page(None), 1);
        assert_eq!(clamp_page(Some(0)), 1);
        assert_eq!(clamp_page(Some(-4)), 1);
        assert_eq!(clamp_page(Some(3)), 3);
        assert_eq!(clamp_page(Some(i64::MAX)), MAX_PAGE);
    }

    #[test]
    fn offsets() {
        assert_eq!(page_offset(1, 10), 0);
        assert_eq!(page_offset(3, 10), 20);
        assert_eq!(page_offset(0, 50), 0);
    }

    #[test]
    fn counts() {
        assert_eq!(page_count(0, 10), 1);
        assert_eq!(page_count(10, 10), 1);
        assert_eq!(page_count(11, 10), 2);
    }
}
