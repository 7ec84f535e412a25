//! Repository for the `projects` table.

use sqlx::PgPool;
use virasat_core::types::DbId;

use crate::models::project::{Project, ProjectInput};
use crate::models::text_or_empty;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, location, status, price, type, bedrooms, area, \
                       image, features, rating, completion_date, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning its id.
    pub async fn create(pool: &PgPool, input: &ProjectInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO projects
                (title, description, location, status, price, type, bedrooms, area,
                 image, features, rating, completion_date)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12)
             RETURNING id",
        )
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.description))
        .bind(text_or_empty(&input.location))
        .bind(input.status.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.price))
        .bind(input.property_type.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.bedrooms))
        .bind(text_or_empty(&input.area))
        .bind(text_or_empty(&input.image))
        .bind(input.features.encode())
        .bind(input.rating.unwrap_or(0.0))
        .bind(&input.completion_date)
        .fetch_one(pool)
        .await
    }

    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects ordered by most recently created first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Overwrite every column of a project and refresh `updated_at`.
    ///
    /// Missing input fields are written as their defaults, not skipped.
    /// Returns the number of rows affected (0 when the id does not exist).
    pub async fn update(pool: &PgPool, id: DbId, input: &ProjectInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE projects SET
                title = $2, description = $3, location = $4, status = $5, price = $6,
                type = $7, bedrooms = $8, area = $9, image = $10, features = $11,
                rating = $12, completion_date = $13, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.description))
        .bind(text_or_empty(&input.location))
        .bind(input.status.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.price))
        .bind(input.property_type.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.bedrooms))
        .bind(text_or_empty(&input.area))
        .bind(text_or_empty(&input.image))
        .bind(input.features.encode())
        .bind(input.rating.unwrap_or(0.0))
        .bind(&input.completion_date)
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Permanently delete a project by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Number of stored projects.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM projects")
            .fetch_one(pool)
            .await
    }
}
