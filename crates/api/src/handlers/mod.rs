//! Request handlers for API entities.
//!
//! Each submodule provides async handler functions (create, list, get_by_id,
//! update, partial_update, delete) for a single entity type. Handlers delegate
//! to the corresponding repository in `archiscape_db` and map errors via
//! [`AppError`](crate::error::AppError).

pub mod project_content;
