//! HTTP handlers, one module per resource.
//!
//! The helpers below hold the request checks every CRUD resource shares:
//! required-field and id presence, and the `?id=` lookup for deletes.

pub mod auth;
pub mod blogs;
pub mod careers;
pub mod contact;
pub mod news;
pub mod projects;
pub mod settings;
pub mod team;

use axum::http::StatusCode;
use virasat_core::error::CoreError;
use virasat_core::resource::Messages;
use virasat_core::types::{parse_query_id, DbId};

use crate::error::{AppError, AppResult};
use crate::query::IdQuery;

/// Reject a create whose required text field is absent or empty.
pub(crate) fn require_field(value: &Option<String>, message: &str) -> AppResult<()> {
    match value.as_deref() {
        Some(v) if !v.is_empty() => Ok(()),
        _ => Err(AppError::BadRequest(message.to_string())),
    }
}

/// The body id of an update, or 400 with the resource's "missing id" message.
pub(crate) fn require_id(id: Option<DbId>, messages: &Messages) -> AppResult<DbId> {
    id.ok_or_else(|| AppError::BadRequest(messages.missing_id.to_string()))
}

/// Resolve the `?id=` of a delete.
///
/// An absent, blank or `0` id is a bad request. A non-numeric one can never
/// name a row, so it answers the same 404 as a numeric id that matches nothing.
pub(crate) fn delete_target(query: &IdQuery, messages: &Messages) -> AppResult<DbId> {
    match parse_query_id(query.id.as_deref()) {
        None | Some(Ok(0)) => Err(AppError::BadRequest(messages.missing_id.to_string())),
        Some(Ok(id)) => Ok(id),
        Some(Err(raw)) => {
            tracing::debug!(id = %raw, "Non-numeric delete id");
            Err(not_found(messages))
        }
    }
}

pub(crate) fn not_found(messages: &Messages) -> AppError {
    AppError::Core(CoreError::NotFound(messages.not_found.to_string()))
}

/// OPTIONS on any resource path: empty 200.
pub async fn preflight() -> StatusCode {
    StatusCode::OK
}

/// Any verb a resource does not route.
pub async fn method_not_allowed() -> AppError {
    AppError::MethodNotAllowed
}
