//! Repository for the `team` table.

use sqlx::PgPool;
use virasat_core::types::DbId;

use crate::models::team::{TeamMember, TeamMemberInput};
use crate::models::text_or_empty;

const COLUMNS: &str = "id, name, position, bio, image, created_at, updated_at";

pub struct TeamRepo;

impl TeamRepo {
    pub async fn create(pool: &PgPool, input: &TeamMemberInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO team (name, position, bio, image)
             VALUES ($1, $2, $3, $4)
             RETURNING id",
        )
        .bind(text_or_empty(&input.name))
        .bind(text_or_empty(&input.position))
        .bind(text_or_empty(&input.bio))
        .bind(text_or_empty(&input.image))
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team WHERE id = $1");
        sqlx::query_as::<_, TeamMember>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool) -> Result<Vec<TeamMember>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM team ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, TeamMember>(&query).fetch_all(pool).await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &TeamMemberInput,
    ) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE team SET
                name = $2, position = $3, bio = $4, image = $5, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(text_or_empty(&input.name))
        .bind(text_or_empty(&input.position))
        .bind(text_or_empty(&input.bio))
        .bind(text_or_empty(&input.image))
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM team WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
