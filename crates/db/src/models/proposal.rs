//! Proposal model and DTOs.

use agora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `proposals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Proposal {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
    pub description: String,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A proposal joined with the size of its supporter set.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProposalWithSupport {
    pub id: DbId,
    pub space_id: DbId,
    pub title: String,
    pub description: String,
    pub author_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    pub support_count: i64,
}

#[derive(Debug, Deserialize)]
pub struct CreateProposal {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Deserialize)]
pub struct UpdateProposal {
    pub title: Option<String>,
    pub description: Option<String>,
}

/// Result of casting a support vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SupportOutcome {
    Added,
    AlreadySupporting,
    /// The proposal was deleted before the vote landed.
    ProposalGone,
}
