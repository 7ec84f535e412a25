//! Handlers for the `/contact` resource.
//!
//! Submitting the form is public. Listing is open like every other read;
//! triage and removal go through the admin guard.

use axum::extract::State;
use axum::Json;
use virasat_core::resource::CONTACT;
use virasat_core::response::WriteAck;
use virasat_db::models::contact::{ContactInput, ContactStatusUpdate, ContactSubmission};
use virasat_db::repositories::ContactRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{JsonBody, QueryParams};
use crate::handlers::{delete_target, not_found, require_id};
use crate::middleware::auth::AdminAccess;
use crate::query::IdQuery;
use crate::state::AppState;

/// GET /api/contact
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ContactSubmission>>> {
    let submissions = ContactRepo::list(&state.pool).await?;
    Ok(Json(submissions))
}

/// POST /api/contact
///
/// The public contact form. Needs both `name` and `email`.
pub async fn submit(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<ContactInput>,
) -> AppResult<Json<WriteAck>> {
    let present = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.is_empty());
    if !present(&input.name) || !present(&input.email) {
        return Err(AppError::BadRequest(CONTACT.missing_required.to_string()));
    }

    let id = ContactRepo::create(&state.pool, &input).await?;
    tracing::info!(submission_id = id, "Contact submission received");
    Ok(Json(WriteAck::created(id, CONTACT.created)))
}

/// PUT /api/contact
///
/// Only the triage status changes; an omitted status resets it to `New`.
pub async fn update_status(
    _admin: AdminAccess,
    State(state): State<AppState>,
    JsonBody(body): JsonBody<ContactStatusUpdate>,
) -> AppResult<Json<WriteAck>> {
    let id = require_id(body.id, &CONTACT)?;
    let status = body.status.unwrap_or_default();

    let rows = ContactRepo::update_status(&state.pool, id, status).await?;
    tracing::info!(submission_id = id, %status, rows, "Contact submission status set");
    Ok(Json(WriteAck::done(CONTACT.updated)))
}

/// DELETE /api/contact?id=
pub async fn delete(
    _admin: AdminAccess,
    State(state): State<AppState>,
    QueryParams(query): QueryParams<IdQuery>,
) -> AppResult<Json<WriteAck>> {
    let id = delete_target(&query, &CONTACT)?;

    if !ContactRepo::delete(&state.pool, id).await? {
        return Err(not_found(&CONTACT));
    }
    tracing::info!(submission_id = id, "Contact submission deleted");
    Ok(Json(WriteAck::done(CONTACT.deleted)))
}
