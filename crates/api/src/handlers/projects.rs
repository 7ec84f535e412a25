//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::PROJECTS;
use virasat_core::response::WriteAck;
use virasat_db::models::project::{Project, ProjectInput, ProjectUpdate};
use virasat_db::repositories::ProjectRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_field, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/projects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Project>>> {
    let projects = ProjectRepo::list(&state.pool).await?;
    Ok(Json(projects))
}

/// POST /api/projects
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ProjectInput>,
) -> AppResult<Json<WriteAck>> {
    require_field(&input.title, PROJECTS.missing_required)?;

    let id = ProjectRepo::create(&state.pool, &input).await?;
    tracing::info!(project_id = id, "Project created");
    Ok(Json(WriteAck::created(id, PROJECTS.created)))
}

/// PUT /api/projects
pub async fn update(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ProjectUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &PROJECTS)?;

    let rows = ProjectRepo::update(&state.pool, id, &body.fields).await?;
    tracing::info!(project_id = id, rows, "Project updated");
    Ok(Json(WriteAck::done(PROJECTS.updated)))
}

/// DELETE /api/projects?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &PROJECTS)?;

    if !ProjectRepo::delete(&state.pool, id).await? {
        return Err(not_found(&PROJECTS));
    }
    tracing::info!(project_id = id, "Project deleted");
    Ok(Json(WriteAck::done(PROJECTS.deleted)))
}
