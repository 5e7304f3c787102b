//! ProjectContent entity model and wire payload.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use archiscape_core::types::DbId;

/// A project content row from the `project_contents` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ProjectContent {
    pub id: DbId,
    pub version: i32,
    pub import_date: NaiveDate,
    pub file_name: Option<String>,
    pub content: String,
    pub project_id: DbId,
}

/// Wire payload for create, replace and merge-patch requests.
///
/// One shape serves POST, PUT and PATCH: every field is optional at the
/// serde level — `id` because a create must not carry it while an update
/// must, the rest because a merge-patch body may omit anything. Endpoints
/// that demand the required fields run [`Validate::validate`] before
/// touching the database.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProjectContentPayload {
    pub id: Option<DbId>,
    #[validate(required)]
    pub version: Option<i32>,
    #[validate(required)]
    pub import_date: Option<NaiveDate>,
    pub file_name: Option<String>,
    #[validate(required)]
    pub content: Option<String>,
    #[validate(required)]
    pub project_id: Option<DbId>,
}
