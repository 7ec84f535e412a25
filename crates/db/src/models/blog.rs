//! Blog post model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::content::BlogCategory;
use virasat_core::json_list::JsonList;
use virasat_core::types::{
    deserialize_lenient_id, deserialize_lenient_i32, deserialize_lenient_text, Date, DbId, Timestamp,
};

/// A row from the `blogs` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct BlogPost {
    pub id: DbId,
    pub title: String,
    pub excerpt: String,
    pub content: String,
    #[sqlx(try_from = "String")]
    pub category: BlogCategory,
    pub author: String,
    pub publish_date: Date,
    /// Display string, e.g. `"5 min read"`.
    pub read_time: String,
    pub views: i32,
    pub image: String,
    #[sqlx(try_from = "String")]
    pub tags: JsonList,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BlogInput {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub excerpt: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub content: Option<String>,
    pub category: Option<BlogCategory>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub author: Option<String>,
    pub publish_date: Option<Date>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub read_time: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    pub views: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub image: Option<String>,
    #[serde(default)]
    pub tags: JsonList,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BlogUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: BlogInput,
}
