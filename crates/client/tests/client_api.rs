//! Client behaviour against an in-process stub server.

use std::collections::BTreeMap;

use assert_matches::assert_matches;
use axum::extract::Query;
use axum::http::{HeaderMap, StatusCode};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use virasat_client::{ApiClient, ClientError};
use virasat_core::resource::Resource;

/// Serve `app` on an ephemeral port and return its base URL.
async fn spawn_stub(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

fn stub() -> Router {
    Router::new()
        .route(
            "/api/projects",
            get(|| async { Json(json!([{"id": 2, "title": "B"}, {"id": 1, "title": "A"}])) })
                .post(|Json(body): Json<Value>| async move {
                    let title = body["title"].clone();
                    Json(json!({"success": true, "id": 9, "message": title}))
                })
                .delete(|Query(q): Query<BTreeMap<String, String>>| async move {
                    if q.get("id").map(String::as_str) == Some("1") {
                        (
                            StatusCode::OK,
                            Json(json!({"success": true, "message": "Project deleted successfully"})),
                        )
                    } else {
                        (
                            StatusCode::NOT_FOUND,
                            Json(json!({"error": "Project not found", "code": "NOT_FOUND"})),
                        )
                    }
                }),
        )
        .route("/api/news", get(|| async { Json(json!([{"id": 1}])) }))
        .route("/api/blogs", get(|| async { Json(json!([])) }))
        .route("/api/careers", get(|| async { Json(json!([{"id": 4}, {"id": 5}])) }))
        .route("/api/team", get(|| async { Json(json!([{"id": 7}])) }))
        .route(
            "/api/settings",
            get(|| async { Json(json!({"site_name": "Virasat"})) }),
        )
        .route("/plain", get(|| async { "saved" }))
        .route(
            "/api/auth/login",
            post(|| async {
                Json(json!({"access_token": "tok-123", "token_type": "Bearer", "expires_in": 3600}))
            }),
        )
        .route(
            "/whoami",
            get(|headers: HeaderMap| async move {
                let auth = headers
                    .get("authorization")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                let content_type = headers
                    .get("content-type")
                    .and_then(|v| v.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({"authorization": auth, "content_type": content_type}))
            }),
        )
}

#[tokio::test]
async fn trailing_slash_in_base_is_dropped() {
    let client = ApiClient::new("http://localhost:3000/");
    assert_eq!(client.base_url(), "http://localhost:3000");
}

#[tokio::test]
async fn list_decodes_rows() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(format!("{base}/"));

    let rows: Vec<Value> = client.list(Resource::Projects).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["title"], "B");
}

#[tokio::test]
async fn create_returns_write_ack() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(base);

    let ack = client
        .create(Resource::Projects, &json!({"title": "Made"}))
        .await
        .unwrap();
    assert!(ack.success);
    assert_eq!(ack.id, Some(9));
    assert_eq!(ack.message, "Made");
}

#[tokio::test]
async fn non_success_status_is_an_error() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(base);

    let ack = client.delete(Resource::Projects, 1).await.unwrap();
    assert_eq!(ack.message, "Project deleted successfully");

    let err = client.delete(Resource::Projects, 2).await.unwrap_err();
    assert_matches!(
        err,
        ClientError::Status { status: 404, status_text } if status_text == "Not Found"
    );
}

#[tokio::test]
async fn non_json_body_falls_back_to_message() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(base);

    let value = client
        .request(reqwest::Method::GET, "/plain", None)
        .await
        .unwrap();
    assert_eq!(value, json!({"message": "saved"}));
}

#[tokio::test]
async fn transport_failure_is_reported() {
    // Nothing listens on port 9 of the loopback interface.
    let client = ApiClient::new("http://127.0.0.1:9");
    let err = client.settings().await.unwrap_err();
    assert_matches!(err, ClientError::Transport(_));
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(base);

    // Settings is an object, not a list.
    let err = client.list::<Value>(Resource::Settings).await.unwrap_err();
    assert_matches!(err, ClientError::Decode(_));
}

#[tokio::test]
async fn login_token_is_sent_afterwards() {
    let base = spawn_stub(stub()).await;
    let mut client = ApiClient::new(base);

    let before = client
        .request(reqwest::Method::GET, "/whoami", None)
        .await
        .unwrap();
    assert_eq!(before["authorization"], "");
    assert_eq!(before["content_type"], "application/json");

    let login = client.login("admin", "secret").await.unwrap();
    assert_eq!(login.expires_in, 3600);

    let after = client
        .request(reqwest::Method::GET, "/whoami", None)
        .await
        .unwrap();
    assert_eq!(after["authorization"], "Bearer tok-123");
}

#[tokio::test]
async fn dashboard_collects_all_five_lists() {
    let base = spawn_stub(stub()).await;
    let client = ApiClient::new(base);

    let snapshot = client.dashboard().await.unwrap();
    let stats = snapshot.stats();
    assert_eq!(stats.total_projects, 2);
    assert_eq!(stats.total_news, 1);
    assert_eq!(stats.total_blogs, 0);
    assert_eq!(stats.total_careers, 2);
    assert_eq!(stats.total_team, 1);
}

#[tokio::test]
async fn dashboard_fails_when_any_list_fails() {
    // No team route: that request answers 404.
    let app = Router::new()
        .route("/api/projects", get(|| async { Json(json!([])) }))
        .route("/api/news", get(|| async { Json(json!([])) }))
        .route("/api/blogs", get(|| async { Json(json!([])) }))
        .route("/api/careers", get(|| async { Json(json!([])) }));
    let base = spawn_stub(app).await;
    let client = ApiClient::new(base);

    let err = client.dashboard().await.unwrap_err();
    assert_matches!(err, ClientError::Status { status: 404, .. });
}
