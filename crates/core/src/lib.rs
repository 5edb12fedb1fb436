//! Domain rules for the Agora participation platform.
//!
//! This crate has no I/O. It holds the error type, identifier aliases,
//! role/permission rules and the per-module validation and derivation
//! functions shared by the repository and HTTP layers.

pub mod calendar;
pub mod debate;
pub mod documents;
pub mod error;
pub mod fields;
pub mod news;
pub mod pages;
pub mod pagination;
pub mod permissions;
pub mod profile;
pub mod proposals;
pub mod roles;
pub mod spaces;
pub mod types;
