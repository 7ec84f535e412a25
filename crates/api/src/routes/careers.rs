use axum::routing::get;
use axum::Router;

use crate::handlers::careers;
use crate::state::AppState;

/// Routes for `/careers`.
pub fn router() -> Router<AppState> {
    super::resource(
        "/careers",
        get(careers::list)
            .post(careers::create)
            .put(careers::update)
            .delete(careers::delete),
    )
}
