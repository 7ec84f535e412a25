//! Repository for the `contact_submissions` table.

use sqlx::PgPool;
use virasat_core::content::SubmissionStatus;
use virasat_core::types::DbId;

use crate::models::contact::{ContactInput, ContactSubmission};
use crate::models::text_or_empty;

const COLUMNS: &str = "id, name, email, phone, subject, message, status, created_at";

/// Provides data access for contact-form submissions.
pub struct ContactRepo;

impl ContactRepo {
    pub async fn create(pool: &PgPool, input: &ContactInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO contact_submissions (name, email, phone, subject, message, status)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING id",
        )
        .bind(text_or_empty(&input.name))
        .bind(text_or_empty(&input.email))
        .bind(text_or_empty(&input.phone))
        .bind(text_or_empty(&input.subject))
        .bind(text_or_empty(&input.message))
        .bind(input.status.unwrap_or_default().as_str())
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ContactSubmission>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM contact_submissions WHERE id = $1");
        sqlx::query_as::<_, ContactSubmission>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all submissions, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<ContactSubmission>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM contact_submissions ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, ContactSubmission>(&query)
            .fetch_all(pool)
            .await
    }

    /// Set the triage status of a submission. Returns rows affected.
    pub async fn update_status(
        pool: &PgPool,
        id: DbId,
        status: SubmissionStatus,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query("UPDATE contact_submissions SET status = $2 WHERE id = $1")
            .bind(id)
            .bind(status.as_str())
            .execute(pool)
            .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM contact_submissions WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
