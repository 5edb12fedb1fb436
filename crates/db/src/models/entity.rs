//! Supporting entity (organisation) of a space.

use agora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `entities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Entity {
    pub id: DbId,
    pub space_id: DbId,
    pub name: String,
    pub website: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Deserialize)]
pub struct CreateEntity {
    pub name: String,
    pub website: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateEntity {
    pub name: Option<String>,
    pub website: Option<String>,
}
