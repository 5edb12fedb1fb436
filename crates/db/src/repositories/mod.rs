//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod debate_repo;
pub mod document_repo;
pub mod entity_repo;
pub mod event_repo;
pub mod interest_repo;
pub mod note_repo;
pub mod page_repo;
pub mod post_repo;
pub mod profile_repo;
pub mod proposal_repo;
pub mod space_repo;
pub mod user_repo;

pub use debate_repo::DebateRepo;
pub use document_repo::DocumentRepo;
pub use entity_repo::EntityRepo;
pub use event_repo::EventRepo;
pub use interest_repo::InterestRepo;
pub use note_repo::NoteRepo;
pub use page_repo::PageRepo;
pub use post_repo::PostRepo;
pub use profile_repo::ProfileRepo;
pub use proposal_repo::ProposalRepo;
pub use space_repo::SpaceRepo;
pub use user_repo::UserRepo;
