//! Contact-form submission model and DTOs.
//!
//! Submissions are written once by the public contact form. Afterwards only
//! their triage status changes, so there is no `updated_at` column.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::content::SubmissionStatus;
use virasat_core::types::{deserialize_lenient_id, deserialize_lenient_text, DbId, Timestamp};

/// A row from the `contact_submissions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ContactSubmission {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
    #[sqlx(try_from = "String")]
    pub status: SubmissionStatus,
    pub created_at: Timestamp,
}

/// Contact form body. `name` and `email` are required.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactInput {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub subject: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub message: Option<String>,
    pub status: Option<SubmissionStatus>,
}

/// Body of `PUT /contact`. A missing status resets the submission to `New`.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactStatusUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    pub status: Option<SubmissionStatus>,
}
