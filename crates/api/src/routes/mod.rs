pub mod health;
pub mod project_content;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /project-contents          list, create (GET, POST)
/// /project-contents/{id}     get, replace, patch, delete (GET, PUT, PATCH, DELETE)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/project-contents", project_content::router())
}
