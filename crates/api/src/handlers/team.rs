//! Handlers for the `/team` resource.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::TEAM;
use virasat_core::response::WriteAck;
use virasat_db::models::team::{TeamMember, TeamMemberInput, TeamMemberUpdate};
use virasat_db::repositories::TeamRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_field, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/team
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<TeamMember>>> {
    let rows = TeamRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/team
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<TeamMemberInput>,
) -> AppResult<Json<WriteAck>> {
    require_field(&input.name, TEAM.missing_required)?;

    let id = TeamRepo::create(&state.pool, &input).await?;
    tracing::info!(member_id = id, "team0 created");
    Ok(Json(WriteAck::created(id, TEAM.created)))
}

/// PUT /api/team
pub async fn update(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<TeamMemberUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &TEAM)?;

    let rows = TeamRepo::update(&state.pool, id, &body.fields).await?;
    tracing::info!(member_id = id, rows, "team0 updated");
    Ok(Json(WriteAck::done(TEAM.updated)))
}

/// DELETE /api/team?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &TEAM)?;

    if !TeamRepo::delete(&state.pool, id).await? {
        return Err(not_found(&TEAM));
    }
    tracing::info!(member_id = id, "team0 deleted");
    Ok(Json(WriteAck::done(TEAM.deleted)))
}
