//! News article model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::content::NewsCategory;
use virasat_core::types::{
    deserialize_lenient_id, deserialize_lenient_bool, deserialize_lenient_text, Date, DbId, Timestamp,
};

/// A row from the `news` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct NewsArticle {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub category: NewsCategory,
    pub author: String,
    pub publish_date: Date,
    pub image: String,
    pub featured: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Create body and full-overwrite column values for a news article.
///
/// `publish_date` defaults to the database's current date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NewsInput {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub content: Option<String>,
    pub category: Option<NewsCategory>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub author: Option<String>,
    pub publish_date: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub image: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_bool")]
    pub featured: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewsUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: NewsInput,
}
