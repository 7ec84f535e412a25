//! Handlers for the `/settings` key/value store.

use std::collections::BTreeMap;

use axum::extract::State;
use axum::Json;
use serde_json::Value;
use virasat_core::response::WriteAck;
use virasat_db::models::setting::setting_value_text;
use virasat_db::repositories::SettingRepo;

use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::middleware::auth::AdminAccess;
use crate::state::AppState;

const SETTINGS_UPDATED: &str = "Settings updated successfully";

/// GET /api/settings
///
/// Every setting as one flat `{key: value}` object.
pub async fn get_all(State(state): State<AppState>) -> AppResult<Json<BTreeMap<String, String>>> {
    let settings = SettingRepo::as_map(&state.pool).await?;
    Ok(Json(settings))
}

/// POST|PUT /api/settings
///
/// Upserts every key of the body in one transaction.
pub async fn save(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<Value>,
) -> AppResult<Json<WriteAck>> {
    let entries: Vec<(String, String)> = match body {
        Value::Object(map) if !map.is_empty() => map
            .iter()
            .map(|(key, value)| (key.clone(), setting_value_text(value)))
            .collect(),
        _ => return Err(AppError::BadRequest("Invalid JSON data".into())),
    };

    SettingRepo::bulk_upsert(&state.pool, &entries).await?;
    tracing::info!(count = entries.len(), "Settings saved");
    Ok(Json(WriteAck::done(SETTINGS_UPDATED)))
}
