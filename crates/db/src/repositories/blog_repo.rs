//! Repository for the `blogs` table.

use sqlx::PgPool;
use virasat_core::types::DbId;

use crate::models::blog::{BlogInput, BlogPost};
use crate::models::text_or_empty;

const COLUMNS: &str = "id, title, excerpt, content, category, author, publish_date, read_time, \
                       views, image, tags, created_at, updated_at";

/// Provides CRUD operations for blog posts.
pub struct BlogRepo;

impl BlogRepo {
    pub async fn create(pool: &PgPool, input: &BlogInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO blogs
                (title, excerpt, content, category, author, publish_date, read_time,
                 views, image, tags)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE), $7, $8, $9, $10)
             RETURNING id",
        )
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.excerpt))
        .bind(text_or_empty(&input.content))
        .bind(input.category.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.author))
        .bind(input.publish_date)
        .bind(text_or_empty(&input.read_time))
        .bind(input.views.unwrap_or(0))
        .bind(text_or_empty(&input.image))
        .bind(input.tags.encode())
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs WHERE id = $1");
        sqlx::query_as::<_, BlogPost>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all posts, newest first, with tags decoded.
    pub async fn list(pool: &PgPool) -> Result<Vec<BlogPost>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM blogs ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, BlogPost>(&query).fetch_all(pool).await
    }

    /// Overwrite the editable columns and refresh `updated_at`. The view
    /// counter is left as stored.
    pub async fn update(pool: &PgPool, id: DbId, input: &BlogInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE blogs SET
                title = $2, excerpt = $3, content = $4, category = $5, author = $6,
                publish_date = COALESCE($7, CURRENT_DATE), read_time = $8,
                image = $9, tags = $10, updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.excerpt))
        .bind(text_or_empty(&input.content))
        .bind(input.category.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.author))
        .bind(input.publish_date)
        .bind(text_or_empty(&input.read_time))
        .bind(text_or_empty(&input.image))
        .bind(input.tags.encode())
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM blogs WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
