//! Handlers for the `/blogs` resource.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::BLOGS;
use virasat_core::response::WriteAck;
use virasat_db::models::blog::{BlogPost, BlogInput, BlogUpdate};
use virasat_db::repositories::BlogRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_field, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/blogs
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<BlogPost>>> {
    let rows = BlogRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/blogs
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<BlogInput>,
) -> AppResult<Json<WriteAck>> {
    require_field(&input.title, BLOGS.missing_required)?;

    let id = BlogRepo::create(&state.pool, &input).await?;
    tracing::info!(post_id = id, "blogs0 created");
    Ok(Json(WriteAck::created(id, BLOGS.created)))
}

/// PUT /api/blogs
pub async fn update(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<BlogUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &BLOGS)?;

    let rows = BlogRepo::update(&state.pool, id, &body.fields).await?;
    tracing::info!(post_id = id, rows, "blogs0 updated");
    Ok(Json(WriteAck::done(BLOGS.updated)))
}

/// DELETE /api/blogs?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &BLOGS)?;

    if !BlogRepo::delete(&state.pool, id).await? {
        return Err(not_found(&BLOGS));
    }
    tracing::info!(post_id = id, "blogs0 deleted");
    Ok(Json(WriteAck::done(BLOGS.deleted)))
}
