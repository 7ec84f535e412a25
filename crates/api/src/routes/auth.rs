use axum::routing::post;
use axum::Router;

use crate::handlers::auth;
use crate::state::AppState;

/// Routes mounted at `/auth`.
///
/// ```text
/// POST /auth/login   -> login (public)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/auth/login", post(auth::login))
}
