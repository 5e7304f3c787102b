//! Route definitions for the `/project-contents` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::project_content;
use crate::state::AppState;

/// Routes mounted at `/project-contents`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// PATCH  /{id}    -> partial_update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(project_content::list).post(project_content::create),
        )
        .route(
            "/{id}",
            get(project_content::get_by_id)
                .put(project_content::update)
                .patch(project_content::partial_update)
                .delete(project_content::delete),
        )
}
