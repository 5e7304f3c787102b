//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod project_content_repo;
pub mod project_repo;

pub use project_content_repo::ProjectContentRepo;
pub use project_repo::ProjectRepo;
