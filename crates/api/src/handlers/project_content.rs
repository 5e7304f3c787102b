//! Handlers for the `/project-contents` resource.
//!
//! Mutating endpoints enforce the in-body id rules: a create payload must not
//! carry an id, and an update payload must carry one matching the path. Each
//! rule violation maps to a 400 with its own error key so clients can
//! distinguish the cases.

use axum::extract::{Path, Query, State};
use axum::http::header::{self, HeaderMap, HeaderValue};
use axum::http::StatusCode;
use axum::Json;
use validator::Validate;

use archiscape_core::error::CoreError;
use archiscape_core::pagination::{clamp_limit, clamp_offset, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT};
use archiscape_core::types::DbId;
use archiscape_db::models::project_content::{ProjectContent, ProjectContentPayload};
use archiscape_db::repositories::ProjectContentRepo;

use crate::error::{AppError, AppResult};
use crate::headers;
use crate::query::PaginationParams;
use crate::state::AppState;

const ENTITY_NAME: &str = "projectContent";
const API_PATH: &str = "/api/v1/project-contents";

/// POST /api/v1/project-contents
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<ProjectContentPayload>,
) -> AppResult<(StatusCode, HeaderMap, Json<ProjectContent>)> {
    input.validate()?;
    if input.id.is_some() {
        return Err(AppError::BadRequest {
            code: "idexists",
            message: format!("A new {ENTITY_NAME} cannot already have an ID"),
        });
    }

    let content = ProjectContentRepo::insert(&state.pool, &input).await?;
    tracing::info!(id = content.id, "ProjectContent created");

    let mut response_headers = headers::creation_alert(ENTITY_NAME, content.id);
    response_headers.insert(
        header::LOCATION,
        HeaderValue::from_str(&format!("{API_PATH}/{}", content.id))
            .expect("location path is ASCII"),
    );
    Ok((StatusCode::CREATED, response_headers, Json(content)))
}

/// PUT /api/v1/project-contents/{id}
///
/// Full replacement: every stored column takes the payload's value, so a
/// payload without `file_name` clears the stored one.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectContentPayload>,
) -> AppResult<(HeaderMap, Json<ProjectContent>)> {
    input.validate()?;
    check_path_id(id, &input)?;

    if !ProjectContentRepo::exists(&state.pool, id).await? {
        return Err(AppError::BadRequest {
            code: "idnotfound",
            message: "Entity not found".to_string(),
        });
    }

    let content = ProjectContentRepo::replace(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectContent",
            id,
        }))?;
    tracing::info!(id, "ProjectContent updated");

    Ok((headers::update_alert(ENTITY_NAME, id), Json(content)))
}

/// PATCH /api/v1/project-contents/{id}
///
/// Merge-patch: only fields present in the payload overwrite stored values;
/// absent fields (and explicit nulls, which deserialize the same way) are
/// left untouched. The parent project reference is never changed.
pub async fn partial_update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<ProjectContentPayload>,
) -> AppResult<(HeaderMap, Json<ProjectContent>)> {
    check_path_id(id, &input)?;

    if !ProjectContentRepo::exists(&state.pool, id).await? {
        return Err(AppError::BadRequest {
            code: "idnotfound",
            message: "Entity not found".to_string(),
        });
    }

    let content = ProjectContentRepo::merge_patch(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectContent",
            id,
        }))?;
    tracing::info!(id, "ProjectContent patched");

    Ok((headers::update_alert(ENTITY_NAME, id), Json(content)))
}

/// GET /api/v1/project-contents
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<PaginationParams>,
) -> AppResult<(HeaderMap, Json<Vec<ProjectContent>>)> {
    let limit = clamp_limit(params.limit, DEFAULT_PAGE_LIMIT, MAX_PAGE_LIMIT);
    let offset = clamp_offset(params.offset);

    let total = ProjectContentRepo::count(&state.pool).await?;
    let contents = ProjectContentRepo::page(&state.pool, limit, offset).await?;
    tracing::debug!(count = contents.len(), total, "Listed project contents");

    let response_headers = headers::pagination_headers(API_PATH, limit, offset, total);
    Ok((response_headers, Json(contents)))
}

/// GET /api/v1/project-contents/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ProjectContent>> {
    let content = ProjectContentRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "ProjectContent",
            id,
        }))?;
    Ok(Json(content))
}

/// DELETE /api/v1/project-contents/{id}
///
/// Idempotent: responds 204 whether or not the row existed.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<(StatusCode, HeaderMap)> {
    let deleted = ProjectContentRepo::delete(&state.pool, id).await?;
    if deleted {
        tracing::info!(id, "ProjectContent deleted");
    }
    Ok((
        StatusCode::NO_CONTENT,
        headers::deletion_alert(ENTITY_NAME, id),
    ))
}

/// Shared id rules for PUT and PATCH: the payload must carry an id and it
/// must match the path id.
fn check_path_id(id: DbId, input: &ProjectContentPayload) -> AppResult<()> {
    let body_id = input.id.ok_or(AppError::BadRequest {
        code: "idnull",
        message: "Invalid id".to_string(),
    })?;
    if body_id != id {
        return Err(AppError::BadRequest {
            code: "idinvalid",
            message: "Invalid ID".to_string(),
        });
    }
    Ok(())
}
