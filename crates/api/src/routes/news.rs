use axum::routing::get;
use axum::Router;

use crate::handlers::news;
use crate::state::AppState;

/// Routes for `/news`.
pub fn router() -> Router<AppState> {
    super::resource(
        "/news",
        get(news::list)
            .post(news::create)
            .put(news::update)
            .delete(news::delete),
    )
}
