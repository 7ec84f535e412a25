//! Admin guard extractor for write handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use virasat_core::error::CoreError;

use crate::auth::jwt::{validate_token, ADMIN_ROLE};
use crate::error::AppError;
use crate::state::AppState;

/// Proof that the caller may change content.
///
/// Put this extractor first in any handler that writes:
///
/// ```ignore
/// async fn delete(_admin: AdminAccess, State(state): State<AppState>) -> AppResult<Json<WriteAck>> {
///     ...
/// }
/// ```
///
/// With `REQUIRE_ADMIN_AUTH` off every request passes and `username` is
/// `None`. With it on, a valid `Authorization: Bearer <token>` carrying the
/// admin role is required; anything else answers 401.
#[derive(Debug, Clone)]
pub struct AdminAccess {
    /// Token subject, when a token was checked.
    pub username: Option<String>,
}

impl FromRequestParts<AppState> for AdminAccess {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        if !state.config.admin.require_auth {
            return Ok(AdminAccess { username: None });
        }

        let auth_header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        if claims.role != ADMIN_ROLE {
            return Err(AppError::Core(CoreError::Unauthorized(
                "Admin role required".into(),
            )));
        }

        Ok(AdminAccess {
            username: Some(claims.sub),
        })
    }
}
