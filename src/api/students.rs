use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::error_response;
use crate::domain::parse_id;
use crate::services::student_service::{self, StudentInput};
use crate::state::AppState;

pub async fn list_students(State(state): State<AppState>) -> impl IntoResponse {
    match student_service::list_students(&state.db).await {
        Ok(students) => (StatusCode::OK, Json(students)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_student(
    State(state): State<AppState>,
    Json(payload): Json<StudentInput>,
) -> impl IntoResponse {
    match student_service::create_student(&state.db, payload).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<StudentInput>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match student_service::update_student(&state.db, id, payload).await {
        Ok(student) => (StatusCode::OK, Json(student)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_student(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match student_service::delete_student(&state.db, id).await {
        Ok(()) => (StatusCode::OK, Json(json!({ "message": "Student deleted" }))).into_response(),
        Err(e) => error_response(e),
    }
}
