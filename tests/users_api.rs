//! End-to-end tests for the user routes, against an in-memory database.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::response::Response;
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use stockroom::db::{pool::create_memory_pool, schema::ensure_schema};
use stockroom::server::create_router;
use stockroom::AppState;

async fn test_app() -> Router {
    let pool = create_memory_pool().await.unwrap();
    ensure_schema(&pool).await.unwrap();
    create_router(AppState::new(pool), 30)
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn with_json(method: &str, uri: &str, body: &Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

async fn body_json(response: Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn browse_empty_table_is_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/users/all")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "No users found");
}

#[tokio::test]
async fn add_then_read_round_trips_credentials() {
    let app = test_app().await;

    let response = app
        .clone()
        .oneshot(with_json(
            "POST",
            "/api/users/user",
            &json!({"email": "ada@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User added successfully");
    assert_eq!(body["id"], 1);

    let response = app.oneshot(get("/api/users/user/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(
        body,
        json!({"id": 1, "email": "ada@example.com", "password": "hunter2"})
    );
}

#[tokio::test]
async fn read_missing_user_is_404() {
    let app = test_app().await;

    let response = app.oneshot(get("/api/users/user/0")).await.unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn edit_replaces_the_credential_pair() {
    let app = test_app().await;

    app.clone()
        .oneshot(with_json(
            "POST",
            "/api/users/user",
            &json!({"email": "ada@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(with_json(
            "PUT",
            "/api/users/user/1",
            &json!({"email": "grace@example.com", "password": "swordfish"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User updated successfully");

    let response = app.oneshot(get("/api/users/user/1")).await.unwrap();
    let body = body_json(response).await;
    assert_eq!(body["email"], "grace@example.com");
    assert_eq!(body["password"], "swordfish");
}

#[tokio::test]
async fn edit_missing_user_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(with_json(
            "PUT",
            "/api/users/user/0",
            &json!({"email": "ada@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User not found");
}

#[tokio::test]
async fn destroy_then_read_is_404() {
    let app = test_app().await;

    app.clone()
        .oneshot(with_json(
            "POST",
            "/api/users/user",
            &json!({"email": "ada@example.com", "password": "hunter2"}),
        ))
        .await
        .unwrap();

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/users/user/1")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User deleted successfully");

    let response = app.oneshot(get("/api/users/user/1")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn destroy_missing_user_is_404() {
    let app = test_app().await;

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/users/user/0")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["message"], "User not found");
}
