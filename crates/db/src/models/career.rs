//! Job opening model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::content::{Department, EmploymentType, JobStatus};
use virasat_core::json_list::JsonList;
use virasat_core::types::{deserialize_lenient_id, deserialize_lenient_text, Date, DbId, Timestamp};

/// A row from the `careers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JobOpening {
    pub id: DbId,
    pub title: String,
    #[sqlx(try_from = "String")]
    pub department: Department,
    pub location: String,
    #[sqlx(rename = "type", try_from = "String")]
    #[serde(rename = "type")]
    pub employment_type: EmploymentType,
    pub experience: String,
    pub description: String,
    #[sqlx(try_from = "String")]
    pub requirements: JsonList,
    #[sqlx(try_from = "String")]
    pub benefits: JsonList,
    pub posted_date: Date,
    #[sqlx(try_from = "String")]
    pub status: JobStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct JobOpeningInput {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub title: Option<String>,
    pub department: Option<Department>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub location: Option<String>,
    #[serde(rename = "type")]
    pub employment_type: Option<EmploymentType>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub experience: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub description: Option<String>,
    #[serde(default)]
    pub requirements: JsonList,
    #[serde(default)]
    pub benefits: JsonList,
    pub posted_date: Option<Date>,
    pub status: Option<JobStatus>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct JobOpeningUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: JobOpeningInput,
}
