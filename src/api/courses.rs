use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::error_response;
use crate::domain::parse_id;
use crate::services::course_service::{self, CourseInput};
use crate::state::AppState;

pub async fn list_courses(State(state): State<AppState>) -> impl IntoResponse {
    match course_service::list_courses(&state.db).await {
        Ok(courses) => (StatusCode::OK, Json(courses)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_course(
    State(state): State<AppState>,
    Json(payload): Json<CourseInput>,
) -> impl IntoResponse {
    match course_service::create_course(&state.db, payload).await {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<CourseInput>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match course_service::update_course(&state.db, id, payload).await {
        Ok(course) => (StatusCode::OK, Json(course)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_course(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match course_service::delete_course(&state.db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Course deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
