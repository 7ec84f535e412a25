pub mod auth;
pub mod blogs;
pub mod careers;
pub mod contact;
pub mod health;
pub mod news;
pub mod projects;
pub mod settings;
pub mod team;

use axum::routing::MethodRouter;
use axum::Router;

use crate::handlers;
use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /auth/login     POST                       (public)
/// /projects       GET  POST PUT DELETE
/// /news           GET  POST PUT DELETE
/// /blogs          GET  POST PUT DELETE
/// /careers        GET  POST PUT DELETE
/// /team           GET  POST PUT DELETE
/// /contact        GET  POST(public) PUT DELETE
/// /settings       GET  POST PUT
/// ```
///
/// Updates carry the id in the JSON body and deletes take `?id=`. Every
/// resource path also answers OPTIONS with 200 and any other verb with 405.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .merge(auth::router())
        .merge(projects::router())
        .merge(news::router())
        .merge(blogs::router())
        .merge(careers::router())
        .merge(team::router())
        .merge(contact::router())
        .merge(settings::router())
}

/// Mount a resource at `path` and `path/`, adding the OPTIONS and 405
/// fallbacks to its method set.
pub(crate) fn resource(path: &str, methods: MethodRouter<AppState>) -> Router<AppState> {
    let methods = methods
        .options(handlers::preflight)
        .fallback(handlers::method_not_allowed);

    Router::new()
        .route(path, methods.clone())
        .route(&format!("{path}/"), methods)
}
