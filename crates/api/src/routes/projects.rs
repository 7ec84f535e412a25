use axum::routing::get;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Routes for `/projects`.
pub fn router() -> Router<AppState> {
    super::resource(
        "/projects",
        get(projects::list)
            .post(projects::create)
            .put(projects::update)
            .delete(projects::delete),
    )
}
