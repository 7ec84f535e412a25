use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes for `/settings`. POST and PUT both save; DELETE is not offered.
pub fn router() -> Router<AppState> {
    super::resource(
        "/settings",
        get(settings::get_all)
            .post(settings::save)
            .put(settings::save),
    )
}
