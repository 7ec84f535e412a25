//! Repository for the `news` table.

use sqlx::PgPool;
use virasat_core::types::DbId;

use crate::models::news::{NewsArticle, NewsInput};
use crate::models::text_or_empty;

const COLUMNS: &str = "id, title, excerpt, content, category, author, publish_date, image, \
                       featured, created_at, updated_at";

/// Provides CRUD operations for news articles.
pub struct NewsRepo;

impl NewsRepo {
    /// Insert a new article, returning its id. A missing publish date
    /// becomes today's date.
    pub async fn create(pool: &PgPool, input: &NewsInput) -> Result<DbId, sqlx::Error> {
        sqlx::query_scalar::<_, DbId>(
            "INSERT INTO news
                (title, excerpt, content, category, author, publish_date, image, featured)
             VALUES ($1, $2, $3, $4, $5, COALESCE($6, CURRENT_DATE), $7, $8)
             RETURNING id",
        )
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.excerpt))
        .bind(text_or_empty(&input.content))
        .bind(input.category.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.author))
        .bind(input.publish_date)
        .bind(text_or_empty(&input.image))
        .bind(input.featured.unwrap_or(false))
        .fetch_one(pool)
        .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<NewsArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news WHERE id = $1");
        sqlx::query_as::<_, NewsArticle>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all articles, newest first.
    pub async fn list(pool: &PgPool) -> Result<Vec<NewsArticle>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM news ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, NewsArticle>(&query).fetch_all(pool).await
    }

    /// Overwrite every column and refresh `updated_at`. Returns rows affected.
    pub async fn update(pool: &PgPool, id: DbId, input: &NewsInput) -> Result<u64, sqlx::Error> {
        let result = sqlx::query(
            "UPDATE news SET
                title = $2, excerpt = $3, content = $4, category = $5, author = $6,
                publish_date = COALESCE($7, CURRENT_DATE), image = $8, featured = $9,
                updated_at = NOW()
             WHERE id = $1",
        )
        .bind(id)
        .bind(text_or_empty(&input.title))
        .bind(text_or_empty(&input.excerpt))
        .bind(text_or_empty(&input.content))
        .bind(input.category.unwrap_or_default().as_str())
        .bind(text_or_empty(&input.author))
        .bind(input.publish_date)
        .bind(text_or_empty(&input.image))
        .bind(input.featured.unwrap_or(false))
        .execute(pool)
        .await?;
        Ok(result.rows_affected())
    }

    /// Delete an article by id. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM news WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
