use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde_json::json;

use super::error_response;
use crate::domain::parse_id;
use crate::services::enrollment_service::{self, EnrollmentInput};
use crate::state::AppState;

pub async fn list_enrollments(State(state): State<AppState>) -> impl IntoResponse {
    match enrollment_service::list_enrollments(&state.db).await {
        Ok(enrollments) => (StatusCode::OK, Json(enrollments)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn create_enrollment(
    State(state): State<AppState>,
    Json(payload): Json<EnrollmentInput>,
) -> impl IntoResponse {
    match enrollment_service::create_enrollment(&state.db, payload).await {
        Ok(enrollment) => (StatusCode::OK, Json(enrollment)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn update_enrollment(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<EnrollmentInput>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match enrollment_service::update_enrollment(&state.db, id, payload).await {
        Ok(enrollment) => (StatusCode::OK, Json(enrollment)).into_response(),
        Err(e) => error_response(e),
    }
}

pub async fn delete_enrollment(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(e) => return error_response(e),
    };

    match enrollment_service::delete_enrollment(&state.db, id).await {
        Ok(()) => {
            (StatusCode::OK, Json(json!({ "message": "Enrollment deleted" }))).into_response()
        }
        Err(e) => error_response(e),
    }
}
