//! Project entity model and DTO.
//!
//! Project is the parent of [`crate::models::project_content::ProjectContent`].
//! This service exposes no REST surface for it; the model exists as the
//! foreign-key target and for test fixtures.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use archiscape_core::types::DbId;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub configuration: Option<String>,
    pub active: bool,
}

/// DTO for creating a new project.
#[derive(Debug, Clone, Deserialize)]
pub struct CreateProject {
    pub name: String,
    pub description: Option<String>,
    pub configuration: Option<String>,
    #[serde(default)]
    pub active: bool,
}
