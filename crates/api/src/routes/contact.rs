use axum::routing::get;
use axum::Router;

use crate::handlers::contact;
use crate::state::AppState;

/// Routes for `/contact`. POST is the public form; PUT only sets status.
pub fn router() -> Router<AppState> {
    super::resource(
        "/contact",
        get(contact::list)
            .post(contact::submit)
            .put(contact::update_status)
            .delete(contact::delete),
    )
}
