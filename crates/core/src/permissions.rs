//! Role-based permission rules.
//!
//! Every mutating operation on space content names the [`Permission`] it
//! needs. Admins and moderators hold all of them, members can only propose.
//! Platform administration (spaces, interests) is admin-only and not
//! modelled as a permission.

use crate::roles::{ROLE_ADMIN, ROLE_MEMBER, ROLE_MODERATOR};
use crate::types::DbId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Permission {
    /// Create debates (with their columns and rows).
    AddDebate,
    /// Submit proposals.
    AddProposal,
    /// Edit or delete any proposal, not only one's own.
    ModerateProposals,
    /// Create, edit and delete news posts.
    ManageNews,
    /// Create, edit and delete static pages.
    ManagePages,
    /// Upload and delete space documents.
    ManageDocuments,
    /// Create, edit and delete calendar events.
    ManageEvents,
}

impl Permission {
    pub fn name(self) -> &'static str {
        match self {
            Permission::AddDebate => "add_debate",
            Permission::AddProposal => "add_proposal",
            Permission::ModerateProposals => "moderate_proposals",
            Permission::ManageNews => "manage_news",
            Permission::ManagePages => "manage_pages",
            Permission::ManageDocuments => "manage_documents",
            Permission::ManageEvents => "manage_events",
        }
    }
}

/// Whether `role` holds `permission`.
pub fn role_grants(role: &str, permission: Permission) -> bool {
    match role {
        ROLE_ADMIN | ROLE_MODERATOR => true,
        ROLE_MEMBER => permission == Permission::AddProposal,
        _ => false,
    }
}

/// Whether a caller may edit or delete a record they may have authored.
///
/// Authors can always modify their own record; otherwise the caller's role
/// must hold the moderation permission.
pub fn can_modify_authored(
    role: &str,
    user_id: DbId,
    author_id: Option<DbId>,
    moderation: Permission,
) -> bool {
    author_id == Some(user_id) || role_grants(role, moderation)
}

/// Board notes can only be deleted by their author, whatever the role.
pub fn can_delete_note(user_id: DbId, author_id: DbId) -> bool {
    user_id == author_id
}
