pub mod auth;
pub mod debate;
pub mod documents;
pub mod entities;
pub mod events;
pub mod news;
pub mod pages;
pub mod profiles;
pub mod proposals;
pub mod spaces;
