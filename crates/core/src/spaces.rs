//! Space (participative process) rules.
//!
//! A space is the tenant every other record belongs to. Its URL slug is the
//! routing key and never changes after creation. Module flags decide which
//! sub-applications a space exposes.

use serde::{Deserialize, Serialize};

use crate::fields::{require_text, validate_url_key};
use crate::roles::ROLE_ADMIN;

/// Maximum length of a space name.
pub const MAX_SPACE_NAME_LENGTH: usize = 250;

/// Maximum length of a space URL slug.
pub const MAX_SPACE_SLUG_LENGTH: usize = 100;

/// Maximum length of a supporting entity name.
pub const MAX_ENTITY_NAME_LENGTH: usize = 100;

/// Description stored when a space is created without one.
pub const DEFAULT_SPACE_DESCRIPTION: &str = "Write here your description.";

/// Sub-applications a space can enable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpaceModule {
    Debate,
    Proposals,
    News,
    Calendar,
    Documents,
}

impl SpaceModule {
    /// Human-readable module name used in error messages.
    pub fn label(self) -> &'static str {
        match self {
            SpaceModule::Debate => "debate",
            SpaceModule::Proposals => "proposals",
            SpaceModule::News => "news",
            SpaceModule::Calendar => "calendar",
            SpaceModule::Documents => "documents",
        }
    }
}

/// Module flags of a space, as stored on the `spaces` row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModuleFlags {
    pub debate: bool,
    pub proposals: bool,
    pub news: bool,
    pub calendar: bool,
    pub documents: bool,
}

impl ModuleFlags {
    pub fn is_enabled(&self, module: SpaceModule) -> bool {
        match module {
            SpaceModule::Debate => self.debate,
            SpaceModule::Proposals => self.proposals,
            SpaceModule::News => self.news,
            SpaceModule::Calendar => self.calendar,
            SpaceModule::Documents => self.documents,
        }
    }
}

/// Validate a space name.
pub fn validate_space_name(name: &str) -> Result<(), String> {
    require_text("Space name", name, MAX_SPACE_NAME_LENGTH)
}

/// Validate a space URL slug (`^[a-z0-9_]+$`, at most 100 characters).
pub fn validate_space_slug(slug: &str) -> Result<(), String> {
    validate_url_key("space URL", slug, MAX_SPACE_SLUG_LENGTH)
}

pub fn validate_entity_name(name: &str) -> Result<(), String> {
    require_text("Entity name", name, MAX_ENTITY_NAME_LENGTH)
}

/// Whether a caller may see a space and its content.
///
/// Public spaces are visible to everyone, including anonymous callers.
/// Private spaces are visible to their registered members and to admins.
pub fn can_view_space(is_public: bool, is_member: bool, role: Option<&str>) -> bool {
    is_public || is_member || role == Some(ROLE_ADMIN)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roles::{ROLE_MEMBER, ROLE_MODERATOR};

    #[test]
    fn slug_rules() {
        assert!(validate_space_slug("vigo_2012").is_ok());
        assert!(validate_space_slug("Vigo").is_err());
        assert!(validate_space_slug("vigo.es").is_err());
        assert!(validate_space_slug("").is_err());
        assert!(validate_space_slug(&"a".repeat(101)).is_err());
        assert!(validate_space_slug(&"a".repeat(100)).is_ok());
    }

    #[test]
    fn name_rules() {
        assert!(validate_space_name("Presupuestos participativos").is_ok());
        assert!(validate_space_name(" ").is_err());
        assert!(validate_space_name(&"x".repeat(251)).is_err());
    }

    #[test]
    fn entity_names() {
        assert!(validate_entity_name("Concello de Vigo").is_ok());
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name(&"e".repeat(101)).is_err());
    }

    #[test]
    fn module_flags_gate_each_module_independently() {
        let flags = ModuleFlags {
            debate: true,
            news: true,
            ..ModuleFlags::default()
        };
        assert!(flags.is_enabled(SpaceModule::Debate));
        assert!(flags.is_enabled(SpaceModule::News));
        assert!(!flags.is_enabled(SpaceModule::Proposals));
        assert!(!flags.is_enabled(SpaceModule::Calendar));
        assert!(!flags.is_enabled(SpaceModule::Documents));
    }

    #[test]
    fn private_space_visibility() {
        assert!(can_view_space(true, false, None));
        assert!(!can_view_space(false, false, None));
        assert!(!can_view_space(false, false, Some(ROLE_MEMBER)));
        assert!(!can_view_space(false, false, Some(ROLE_MODERATOR)));
        assert!(can_view_space(false, true, Some(ROLE_MEMBER)));
        assert!(can_view_space(false, false, Some(ROLE_ADMIN)));
    }
}
