//! Handlers for the `/news` resource.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::NEWS;
use virasat_core::response::WriteAck;
use virasat_db::models::news::{NewsArticle, NewsInput, NewsUpdate};
use virasat_db::repositories::NewsRepo;

use crate::error::AppResult;
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_field, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/news
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<NewsArticle>>> {
    let rows = NewsRepo::list(&state.pool).await?;
    Ok(Json(rows))
}

/// POST /api/news
pub async fn create(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(input): JsonBody<NewsInput>,
) -> AppResult<Json<WriteAck>> {
    require_field(&input.title, NEWS.missing_required)?;

    let id = NewsRepo::create(&state.pool, &input).await?;
    tracing::info!(article_id = id, "news0 created");
    Ok(Json(WriteAck::created(id, NEWS.created)))
}

/// PUT /api/news
pub async fn update(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<NewsUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &NEWS)?;

    let rows = NewsRepo::update(&state.pool, id, &body.fields).await?;
    tracing::info!(article_id = id, rows, "news0 updated");
    Ok(Json(WriteAck::done(NEWS.updated)))
}

/// DELETE /api/news?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &NEWS)?;

    if !NewsRepo::delete(&state.pool, id).await? {
        return Err(not_found(&NEWS));
    }
    tracing::info!(article_id = id, "news0 deleted");
    Ok(Json(WriteAck::done(NEWS.deleted)))
}
