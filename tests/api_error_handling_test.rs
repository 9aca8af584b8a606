use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`

use registrar::api;
use registrar::db;
use registrar::state::AppState;

async fn setup_test_app() -> Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db, "http://localhost:1/weather".to_string());
    api::api_router(state)
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let mut builder = Request::builder().uri(uri).method(method);

    let request = match body {
        Some(v) => {
            builder = builder.header(header::CONTENT_TYPE, "application/json");
            builder
                .body(Body::from(serde_json::to_vec(&v).unwrap()))
                .unwrap()
        }
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, value)
}

#[tokio::test]
async fn test_not_found_on_missing_records() {
    let app = setup_test_app().await;

    let (status, body) = send(
        &app,
        Method::PUT,
        "/students/999",
        Some(json!({ "name": "Ghost", "age": 20, "email": "ghost@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Student not found");

    let (status, _) = send(&app, Method::DELETE, "/students/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        Method::PUT,
        "/courses/999",
        Some(json!({ "title": "Ghost", "description": "..." })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(&app, Method::DELETE, "/courses/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, body) = send(&app, Method::DELETE, "/enrollments/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Enrollment not found");
}

#[tokio::test]
async fn test_delete_missing_student_has_no_side_effects() {
    let app = setup_test_app().await;

    let (status, _) = send(
        &app,
        Method::POST,
        "/students/",
        Some(json!({ "name": "Ana", "age": 21, "email": "ana@example.com" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = send(&app, Method::DELETE, "/students/999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, body) = send(&app, Method::GET, "/students/", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_malformed_identifier_tokens() {
    let app = setup_test_app().await;

    // Path identifiers
    let (status, body) = send(&app, Method::DELETE, "/students/64f1c0ffee", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid identifier"));

    let (status, _) = send(
        &app,
        Method::PUT,
        "/courses/not-a-token",
        Some(json!({ "title": "X", "description": "Y" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    // Body identifiers on enrollment creation
    let (status, body) = send(
        &app,
        Method::POST,
        "/enrollments/",
        Some(json!({ "student_id": "abc", "course_id": "1" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["error"].as_str().unwrap().contains("Invalid identifier"));

    let (_, body) = send(&app, Method::GET, "/enrollments/", None).await;
    assert!(body.as_array().unwrap().is_empty());
}
