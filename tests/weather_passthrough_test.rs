use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
};
use serde_json::{json, Value};
use tower::util::ServiceExt; // for `oneshot`
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use registrar::api;
use registrar::db;
use registrar::state::AppState;

async fn setup_test_app(weather_url: String) -> axum::Router {
    let db = db::init_db("sqlite::memory:")
        .await
        .expect("Failed to init DB");
    let state = AppState::new(db, weather_url);
    api::api_router(state)
}

async fn get_weather(app: &axum::Router) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri("/external/weather")
        .method(Method::GET)
        .body(Body::empty())
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn test_weather_passthrough_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "city": "Lisbon",
            "temperature_c": 24,
            "condition": "sunny"
        })))
        .mount(&mock_server)
        .await;

    let app = setup_test_app(format!("{}/weather", mock_server.uri())).await;

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["city"], "Lisbon");
    assert_eq!(body["temperature_c"], 24);
}

#[tokio::test]
async fn test_weather_passthrough_upstream_error() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&mock_server)
        .await;

    let app = setup_test_app(format!("{}/weather", mock_server.uri())).await;

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].as_str().unwrap().contains("upstream"));
}

#[tokio::test]
async fn test_weather_passthrough_unreachable_upstream() {
    // Nothing listens on port 1
    let app = setup_test_app("http://127.0.0.1:1/weather".to_string()).await;

    let (status, body) = get_weather(&app).await;
    assert_eq!(status, StatusCode::BAD_GATEWAY);
    assert!(body["error"].is_string());
}
