//! Repository for the `careers` table.

use sqlx::PgPool;
use virasat_core::types::DbId;

use crate::models::career::{JobOpening, JobOpeningInput};
use crate::models::text_or_empty;

const COLUMNS: &str = "id, title, department, location, type, experience, description, \
                       requirements, benefits, posted_date, status, created_at, updated_at";

/// Provides CRUD operations for job openings.
pub struct CareerRepo;

impl CareerRepo {
    pub async fn create(pool: &PgPool, input: &JobOpeningInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO careers
                (title, department, location, type, experience, description,
                 requirements, benefits, posted_date, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, COALESCE($9, CURRENT_DATE), $10)
             RETURNING id",
        )
        .bind(text_or_empty(&input.title))
        .bind(input.department.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.location))
        .bind(input.employment_type.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.experience))
        .bind(text_or_empty(&input.description))
        .bind(input.requirements.encode())
        .bind(input.benefits.encode())
        .bind(input.posted_date)
        .bind(input.status.unwrap_or_default().as_str())
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<JobOpening>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM careers WHERE id = $1");
        sqlx::query_as::<_, JobOpening>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<JobOpening>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM careers ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, JobOpening>(&query).fetch_all(pool).await
    }

    /// Overwrite the editable columns and refresh `updated_at`. The posted
    /// date keeps its stored value. Returns rows affected.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &JobOpeningInput,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE careers SET
                title = $2, department = $3, location = $4, type = $5, experience = $6,
                description = $7, requirements = $8, benefits = $9, status = $10,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(text_or_empty(&input.title))
        .bind(input.department.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.location))
        .bind(input.employment_type.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.experience))
        .bind(text_or_empty(&input.description))
        .bind(input.requirements.encode())
        .bind(input.benefits.encode())
        .bind(input.status.unwrap_or_default().as_str())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM careers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
