//! HTTP-level integration tests for `/api/settings`.

mod common;

use axum::http::{Method, StatusCode};
use common::{body_json, delete, get, post_json, put_json, send_raw};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_settings_start_empty(pool: PgPool) {
    let response = get(common::build_test_app(pool), "/api/settings").await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await, json!({}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_save_and_read_back_as_map(pool: PgPool) {
    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/settings",
        json!({"site_name": "Virasat", "phone": 9876, "footer_note": null}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["success"], true);
    assert_eq!(json["message"], "Settings updated successfully");

    let map = body_json(get(common::build_test_app(pool), "/api/settings").await).await;
    assert_eq!(
        map,
        json!({"site_name": "Virasat", "phone": "9876", "footer_note": ""})
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_put_overwrites_existing_keys(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/settings",
        json!({"site_name": "Old", "email": "info@virasat.test"}),
    )
    .await;

    let response = put_json(
        common::build_test_app(pool.clone()),
        "/api/settings",
        json!({"site_name": "New"}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let map = body_json(get(common::build_test_app(pool), "/api/settings").await).await;
    assert_eq!(map["site_name"], "New");
    assert_eq!(map["email"], "info@virasat.test");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_empty_or_non_object_body_is_rejected(pool: PgPool) {
    let response = post_json(common::build_test_app(pool.clone()), "/api/settings", json!({})).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["error"], "Invalid JSON data");

    let response = post_json(
        common::build_test_app(pool.clone()),
        "/api/settings",
        json!(["site_name"]),
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send_raw(
        common::build_test_app(pool),
        Method::PUT,
        "/api/settings",
        "site_name=Virasat",
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_failed_save_changes_nothing(pool: PgPool) {
    post_json(
        common::build_test_app(pool.clone()),
        "/api/settings",
        json!({"site_name": "Before"}),
    )
    .await;

    // The key column holds at most 100 characters, so this batch fails part way.
    let mut body = json!({"site_name": "After"});
    body["k".repeat(150).as_str()] = json!("too long");

    let response = post_json(common::build_test_app(pool.clone()), "/api/settings", body).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");

    let map = body_json(get(common::build_test_app(pool), "/api/settings").await).await;
    assert_eq!(map, json!({"site_name": "Before"}));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_delete_is_not_allowed(pool: PgPool) {
    let response = delete(common::build_test_app(pool), "/api/settings?id=1").await;
    assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
}
