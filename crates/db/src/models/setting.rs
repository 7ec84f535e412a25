//! Website setting model.

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;
use virasat_core::types::{DbId, Timestamp};

/// A row from the `website_settings` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Setting {
    pub id: DbId,
    pub setting_key: String,
    pub setting_value: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Stored form of a submitted setting value.
///
/// Strings are kept verbatim, `null` becomes the empty string, and any other
/// JSON value is stored as its JSON text.
pub fn setting_value_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}
