//! Space (participative process) model and DTOs.

use agora_core::spaces::{ModuleFlags, SpaceModule};
use agora_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `spaces` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Space {
    pub id: DbId,
    pub name: String,
    pub slug: String,
    pub description: String,
    pub author_id: Option<DbId>,
    pub public: bool,
    pub mod_debate: bool,
    pub mod_proposals: bool,
    pub mod_news: bool,
    pub mod_cal: bool,
    pub mod_docs: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Space {
    /// Module flags of this space.
    pub fn modules(&self) -> ModuleFlags {
        ModuleFlags {
            debate: self.mod_debate,
            proposals: self.mod_proposals,
            news: self.mod_news,
            calendar: self.mod_cal,
            documents: self.mod_docs,
        }
    }

    pub fn is_module_enabled(&self, module: SpaceModule) -> bool {
        self.modules().is_enabled(module)
    }
}

/// DTO for creating a space. Omitted flags default to `false`.
#[derive(Debug, Deserialize)]
pub struct CreateSpace {
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub mod_debate: Option<bool>,
    pub mod_proposals: Option<bool>,
    pub mod_news: Option<bool>,
    pub mod_cal: Option<bool>,
    pub mod_docs: Option<bool>,
}

/// DTO for updating a space. The slug is immutable and not accepted here.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateSpace {
    pub name: Option<String>,
    pub description: Option<String>,
    pub public: Option<bool>,
    pub mod_debate: Option<bool>,
    pub mod_proposals: Option<bool>,
    pub mod_news: Option<bool>,
    pub mod_cal: Option<bool>,
    pub mod_docs: Option<bool>,
}
