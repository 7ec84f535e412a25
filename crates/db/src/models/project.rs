//! Project entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::content::{ProjectStatus, PropertyType};
use virasat_core::json_list::JsonList;
use virasat_core::types::{
    deserialize_lenient_id, deserialize_lenient_f64, deserialize_lenient_text, DbId, Timestamp,
};

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: String,
    pub location: String,
    #[sqlx(try_from = "String")]
    pub status: ProjectStatus,
    pub price: String,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub property_type: PropertyType,
    pub bedrooms: String,
    pub area: String,
    pub image: String,
    #[sqlx(try_from = "String")]
    pub features: JsonList,
    pub rating: f64,
    /// Free text such as `"Dec 2025"` or `"Ready"`.
    pub completion_date: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Request body for creating a project, and the column values of a
/// full-overwrite update.
///
/// Omitted fields fall back to: empty strings, status `Under Construction`,
/// type `Apartment`, no features, rating 0, no completion date.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectInput {
    /// Required on create.
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub description: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub location: Option<String>,
    pub status: Option<ProjectStatus>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub price: Option<String>,
    #[serde(rename = "type")]
    pub property_type: Option<PropertyType>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub bedrooms: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub area: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub image: Option<String>,
    #[serde(default)]
    pub features: JsonList,
    #[serde(default, deserialize_with = "deserialize_lenient_f64")]
    pub rating: Option<f64>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub completion_date: Option<String>,
}

/// Request body for `PUT /projects`: the row id plus every column.
#[derive(Debug, Clone, Deserialize)]
pub struct ProjectUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: ProjectInput,
}
