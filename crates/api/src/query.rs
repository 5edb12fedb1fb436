//! Shared query parameter types for API handlers.

use serde::Deserialize;

/// Page-number pagination (`?page=`), 1-based.
///
/// Values are clamped with `agora_core::pagination::clamp_page`.
#[derive(Debug, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<i64>,
}
