//! Handler for `/auth/login`.
//!
//! There is a single admin account, configured through the environment.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use virasat_core::error::CoreError;

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::extract::JsonBody;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub access_token: String,
    pub token_type: &'static str,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
}

fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    JsonBody(input): JsonBody<LoginRequest>,
) -> AppResult<Json<LoginResponse>> {
    let admin = &state.config.admin;

    // No configured hash means logins are switched off.
    let Some(hash) = admin.password_hash.as_deref() else {
        return Err(invalid_credentials());
    };

    if input.username != admin.username {
        tracing::warn!(username = %input.username, "Login attempt for unknown user");
        return Err(invalid_credentials());
    }

    let valid = verify_password(&input.password, hash)
        .map_err(|e| AppError::InternalError(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(username = %input.username, "Login failed: wrong password");
        return Err(invalid_credentials());
    }

    let access_token = generate_access_token(&admin.username, &state.config.jwt)
        .map_err(|e| AppError::InternalError(format!("Token generation failed: {e}")))?;

    tracing::info!(username = %admin.username, "Admin logged in");
    Ok(Json(LoginResponse {
        access_token,
        token_type: "Bearer",
        expires_in: state.config.jwt.expiry_mins * 60,
    }))
}
