use axum::routing::get;
use axum::Router;

use crate::handlers::blogs;
use crate::state::AppState;

/// Routes for `/blogs`.
pub fn router() -> Router<AppState> {
    super::resource(
        "/blogs",
        get(blogs::list)
            .post(blogs::create)
            .put(blogs::update)
            .delete(blogs::delete),
    )
}
