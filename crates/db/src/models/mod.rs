//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A `Deserialize` create DTO for inserts
//! - A `Deserialize` update DTO (all `Option` fields) for patches

pub mod debate;
pub mod document;
pub mod entity;
pub mod event;
pub mod page;
pub mod post;
pub mod profile;
pub mod proposal;
pub mod space;
pub mod user;
