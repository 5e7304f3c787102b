//! Repository for the `project_contents` table.

use sqlx::PgPool;

use archiscape_core::types::DbId;

use crate::models::project_content::{ProjectContent, ProjectContentPayload};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, version, import_date, file_name, content, project_id";

/// Provides CRUD operations for project contents.
pub struct ProjectContentRepo;

impl ProjectContentRepo {
    /// Insert a new project content, returning the created row.
    ///
    /// Presence of the required fields is enforced by payload validation in
    /// the API layer; the NOT NULL columns reject anything that slips past.
    pub async fn insert(
        pool: &PgPool,
        input: &ProjectContentPayload,
    ) -> Result<ProjectContent, sqlx::Error> {
        let query = format!(
            "INSERT INTO project_contents (version, import_date, file_name, content, project_id)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectContent>(&query)
            .bind(input.version)
            .bind(input.import_date)
            .bind(&input.file_name)
            .bind(&input.content)
            .bind(input.project_id)
            .fetch_one(pool)
            .await
    }

    /// Find a project content by its internal ID.
    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM project_contents WHERE id = $1");
        sqlx::query_as::<_, ProjectContent>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Whether a row with the given ID exists.
    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM project_contents WHERE id = $1)")
            .bind(id)
            .fetch_one(pool)
            .await
    }

    /// One page of project contents, ordered by id so offset paging stays
    /// coherent between requests.
    pub async fn page(
        pool: &PgPool,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ProjectContent>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM project_contents ORDER BY id LIMIT $1 OFFSET $2");
        sqlx::query_as::<_, ProjectContent>(&query)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// Total number of project content rows.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let count: Option<i64> = sqlx::query_scalar("SELECT COUNT(*) FROM project_contents")
            .fetch_one(pool)
            .await?;
        Ok(count.unwrap_or(0))
    }

    /// Replace every field of an existing row (PUT semantics).
    ///
    /// All columns are overwritten from the payload, so a payload without a
    /// `file_name` nulls the stored one.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn replace(
        pool: &PgPool,
        id: DbId,
        input: &ProjectContentPayload,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        let query = format!(
            "UPDATE project_contents SET
                version = $2,
                import_date = $3,
                file_name = $4,
                content = $5,
                project_id = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectContent>(&query)
            .bind(id)
            .bind(input.version)
            .bind(input.import_date)
            .bind(&input.file_name)
            .bind(&input.content)
            .bind(input.project_id)
            .fetch_optional(pool)
            .await
    }

    /// Apply a merge-patch: only non-`None` fields in `input` overwrite the
    /// stored values. The parent project reference is not patchable.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn merge_patch(
        pool: &PgPool,
        id: DbId,
        input: &ProjectContentPayload,
    ) -> Result<Option<ProjectContent>, sqlx::Error> {
        let query = format!(
            "UPDATE project_contents SET
                version = COALESCE($2, version),
                import_date = COALESCE($3, import_date),
                file_name = COALESCE($4, file_name),
                content = COALESCE($5, content)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ProjectContent>(&query)
            .bind(id)
            .bind(input.version)
            .bind(input.import_date)
            .bind(&input.file_name)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a row by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM project_contents WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
