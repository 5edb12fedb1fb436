//! Well-known role name constants.
//!
//! These must match the seed data in `20260301000001_create_users.sql`.

pub const ROLE_ADMIN: &str = "admin";
pub const ROLE_MODERATOR: &str = "moderator";
pub const ROLE_MEMBER: &str = "member";

/// Role assigned to self-registered accounts.
pub const DEFAULT_ROLE: &str = ROLE_MEMBER;
