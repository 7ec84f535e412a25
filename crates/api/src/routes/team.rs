use axum::routing::get;
use axum::Router;

use crate::handlers::team;
use crate::state::AppState;

/// Routes for `/team`.
pub fn router() -> Router<AppState> {
    super::resource(
        "/team",
        get(team::list)
            .post(team::create)
            .put(team::update)
            .delete(team::delete),
    )
}
