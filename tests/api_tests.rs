/// JSON API tests
/// Drive the full router in-process against a fresh state per test
use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::Response,
    Router,
};
use blog::AppState;
use serde_json::{json, Value};
use tower::util::ServiceExt;

fn create_test_app() -> Router {
    blog::app(AppState::new())
}

async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> Response {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

async fn read_json(response: Response) -> Value {
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&body_bytes).unwrap()
}

fn user_body(login: &str) -> Value {
    json!({
        "email": format!("{login}@example.com"),
        "login": login,
        "password": "x",
    })
}

/// Test the documented create / read / delete walk-through
#[tokio::test]
async fn test_user_lifecycle() {
    let app = create_test_app();

    let response = send(
        &app,
        "POST",
        "/users/",
        Some(json!({"email": "a@b.com", "login": "a", "password": "x"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = read_json(response).await;

    assert_eq!(created["id"], 1);
    assert_eq!(created["email"], "a@b.com");
    assert_eq!(created["login"], "a");
    assert_eq!(created["createdAt"], created["updatedAt"]);
    assert!(created.get("password").is_none());
    assert!(created.get("passwordHash").is_none());

    let response = send(&app, "GET", "/users/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, created);

    let response = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, json!({"detail": "User deleted"}));

    let response = send(&app, "GET", "/users/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({"detail": "User not found"}));
}

/// Test that ids are handed out 1..N and never reused
#[tokio::test]
async fn test_user_ids_sequential() {
    let app = create_test_app();

    for expected in 1..=3 {
        let response = send(&app, "POST", "/users/", Some(user_body("u"))).await;
        assert_eq!(read_json(response).await["id"], expected);
    }

    send(&app, "DELETE", "/users/3", None).await;
    let response = send(&app, "POST", "/users/", Some(user_body("v"))).await;
    assert_eq!(read_json(response).await["id"], 4);

    let response = send(&app, "GET", "/users/", None).await;
    let ids: Vec<i64> = read_json(response)
        .await
        .as_array()
        .unwrap()
        .iter()
        .map(|u| u["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![1, 2, 4]);
}

/// Test PUT /users/{id}
#[tokio::test]
async fn test_update_user() {
    let app = create_test_app();
    let created = read_json(send(&app, "POST", "/users/", Some(user_body("old"))).await).await;

    let response = send(
        &app,
        "PUT",
        "/users/1",
        Some(json!({"email": "new@example.com", "login": "new", "password": "y"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;

    assert_eq!(updated["id"], 1);
    assert_eq!(updated["email"], "new@example.com");
    assert_eq!(updated["login"], "new");
    assert_eq!(updated["createdAt"], created["createdAt"]);

    assert!(timestamp(&updated["updatedAt"]) >= timestamp(&updated["createdAt"]));
}

/// Test that a PUT on a missing user is a 404 and changes nothing
#[tokio::test]
async fn test_update_missing_user() {
    let app = create_test_app();
    let created = read_json(send(&app, "POST", "/users/", Some(user_body("keep"))).await).await;

    let response = send(&app, "PUT", "/users/2", Some(user_body("other"))).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({"detail": "User not found"}));

    let response = send(&app, "GET", "/users/", None).await;
    assert_eq!(read_json(response).await, json!([created]));
}

/// Test DELETE on a missing user
#[tokio::test]
async fn test_delete_missing_user() {
    let app = create_test_app();

    let response = send(&app, "DELETE", "/users/9", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

/// Test full post CRUD over JSON
#[tokio::test]
async fn test_post_crud() {
    let app = create_test_app();

    let response = send(
        &app,
        "POST",
        "/posts/",
        Some(json!({"title": "Hello", "content": "World"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let created = read_json(response).await;
    assert_eq!(created["id"], 1);
    assert_eq!(created["authorId"], 1);
    assert_eq!(created["title"], "Hello");
    assert_eq!(created["content"], "World");

    let response = send(
        &app,
        "PUT",
        "/posts/1",
        Some(json!({"title": "Hi", "content": "There"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let updated = read_json(response).await;
    assert_eq!(updated["title"], "Hi");
    assert_eq!(updated["authorId"], 1);
    assert_eq!(updated["createdAt"], created["createdAt"]);

    let response = send(&app, "GET", "/posts/", None).await;
    assert_eq!(read_json(response).await, json!([updated]));

    let response = send(&app, "DELETE", "/posts/1", None).await;
    assert_eq!(read_json(response).await, json!({"detail": "Post deleted"}));

    let response = send(&app, "GET", "/posts/1", None).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(read_json(response).await, json!({"detail": "Post not found"}));
}

/// Test that removing a user leaves their posts alone
#[tokio::test]
async fn test_delete_user_keeps_posts() {
    let app = create_test_app();
    send(&app, "POST", "/users/", Some(user_body("author"))).await;
    let post = read_json(
        send(
            &app,
            "POST",
            "/posts/",
            Some(json!({"title": "Mine", "content": "..."})),
        )
        .await,
    )
    .await;

    let response = send(&app, "DELETE", "/users/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = send(&app, "GET", "/posts/1", None).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(read_json(response).await, post);
}

/// Test that the extractors reject bad input before it reaches a store
#[tokio::test]
async fn test_rejects_malformed_requests() {
    let app = create_test_app();

    let response = send(&app, "GET", "/users/abc", None).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = send(&app, "POST", "/posts/", Some(json!({"title": "no content"}))).await;
    assert!(response.status().is_client_error());

    let response = send(&app, "GET", "/posts/", None).await;
    assert_eq!(read_json(response).await, json!([]));
}

fn timestamp(value: &Value) -> chrono::DateTime<chrono::Utc> {
    serde_json::from_value(value.clone()).unwrap()
}

/// Test that PUT /users/{id} moves updatedAt forward
#[tokio::test]
async fn test_update_user_refreshes_updated_at() {
    let app = create_test_app();
    let created = read_json(send(&app, "POST", "/users/", Some(user_body("tick"))).await).await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = read_json(send(&app, "PUT", "/users/1", Some(user_body("tock"))).await).await;

    assert!(timestamp(&updated["updatedAt"]) > timestamp(&created["updatedAt"]));
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

/// Test that PUT /posts/{id} moves updatedAt forward
#[tokio::test]
async fn test_update_post_refreshes_updated_at() {
    let app = create_test_app();
    let created = read_json(
        send(
            &app,
            "POST",
            "/posts/",
            Some(json!({"title": "t", "content": "v1"})),
        )
        .await,
    )
    .await;

    tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    let updated = read_json(
        send(
            &app,
            "PUT",
            "/posts/1",
            Some(json!({"title": "t", "content": "v2"})),
        )
        .await,
    )
    .await;

    assert!(timestamp(&updated["updatedAt"]) > timestamp(&created["updatedAt"]));
    assert_eq!(updated["createdAt"], created["createdAt"]);
}

/// Test that collection paths without the trailing slash redirect to it
#[tokio::test]
async fn test_collection_without_slash_redirects() {
    let app = create_test_app();

    let response = send(&app, "GET", "/users", None).await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/users/");

    let response = send(
        &app,
        "POST",
        "/posts",
        Some(json!({"title": "t", "content": "c"})),
    )
    .await;
    assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(response.headers()[header::LOCATION], "/posts/");

    let response = send(&app, "GET", "/posts/", None).await;
    assert_eq!(read_json(response).await, json!([]));
}
