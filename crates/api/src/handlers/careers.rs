//! Handlers for the `/careers` resource.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::CAREERS;
use virasat_core::response::WriteAck;
use virasat_db::models::career::{JobOpening, JobOpeningInput, JobOpeningUpdate};
use virasat_db::repositories::CareerRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_field, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/careers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<JobOpening>>> {
    let rows = CareerRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/careers
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<JobOpeningInput>,
) -> AppResult<Json<WriteAck>> {
    require_field(&input.title, CAREERS.missing_required)?;

    let id = CareerRepo::create(&state.pool, &input).await?;
    tracing::info!(job_id = id, "careers0 created");
    Ok(Json(WriteAck::created(id, CAREERS.created)))
}

/// PUT /api/careers
pub async fn update(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<JobOpeningUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &CAREERS)?;

    let rows = CareerRepo::update(&state.pool, id, &body.fields).await?;
    tracing::info!(job_id = id, rows, "careers0 updated");
    Ok(Json(WriteAck::done(CAREERS.updated)))
}

/// DELETE /api/careers?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &CAREERS)?;

    if !CareerRepo::delete(&state.pool, id).await? {
        return Err(not_found(&CAREERS));
    }
    tracing::info!(job_id = id, "careers0 deleted");
    Ok(Json(WriteAck::done(CAREERS.deleted)))
}
