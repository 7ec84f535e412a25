//! Team member model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use virasat_core::types::{deserialize_lenient_id, deserialize_lenient_text, DbId, Timestamp};

/// A row from the `team` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TeamMember {
    pub id: DbId,
    pub name: String,
    pub position: String,
    pub bio: String,
    pub image: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TeamMemberInput {
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub position: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub bio: Option<String>,
    #[serde(default, deserialize_with = "deserialize_lenient_text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeamMemberUpdate {
    #[serde(default, deserialize_with = "deserialize_lenient_id")]
    pub id: Option<DbId>,
    #[serde(flatten)]
    pub fields: TeamMemberInput,
}
