//! Calendar event model and DTOs.

use agora_core::types::{Date, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `events` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Event {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
    pub event_date: Date,
    pub description: Option<String>,
    pub location: Option<String>,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// An event together with the number of users attending it.
#[derive(Debug, Clone, Serialize)]
pub struct EventDetail {
    #[serde(flatten)]
    pub event: Event,
    pub attendee_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateEvent {
    pub title: String,
    pub event_date: Date,
    pub description: Option<String>,
    pub location: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateEvent {
    pub title: Option<String>,
    pub event_date: Option<Date>,
    pub description: Option<String>,
    pub location: Option<String>,
}
