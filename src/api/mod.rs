pub mod courses;
pub mod enrollments;
pub mod health;
pub mod seed;
pub mod students;
pub mod weather;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post, put},
    Json, Router,
};
use serde_json::json;

use crate::domain::DomainError;
use crate::state::AppState;

pub fn api_router(state: AppState) -> Router {
    Router::new()
        // Health check
        .route("/health", get(health::health_check))
        // Students
        .route(
            "/students/",
            get(students::list_students).post(students::create_student),
        )
        .route("/students/:id", put(students::update_student))
        .route("/students/:id", delete(students::delete_student))
        // Courses
        .route(
            "/courses/",
            get(courses::list_courses).post(courses::create_course),
        )
        .route("/courses/:id", put(courses::update_course))
        .route("/courses/:id", delete(courses::delete_course))
        // Enrollments
        .route(
            "/enrollments/",
            get(enrollments::list_enrollments).post(enrollments::create_enrollment),
        )
        .route("/enrollments/:id", put(enrollments::update_enrollment))
        .route("/enrollments/:id", delete(enrollments::delete_enrollment))
        // Tooling
        .route("/seed/", post(seed::seed_database))
        .route("/external/weather", get(weather::get_weather))
        .with_state(state)
}

/// Map a domain failure onto the wire. Precondition failures go back to the
/// caller as-is; only persistence errors are logged as ours.
pub fn error_response(err: DomainError) -> Response {
    let status = match &err {
        DomainError::DuplicateEmail(_)
        | DomainError::DuplicateEnrollment
        | DomainError::InvalidIdentifier(_) => StatusCode::BAD_REQUEST,
        DomainError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
        DomainError::NotFound(_) | DomainError::StudentNotFound | DomainError::CourseNotFound => {
            StatusCode::NOT_FOUND
        }
        DomainError::Upstream(_) => StatusCode::BAD_GATEWAY,
        DomainError::Database(_) => {
            tracing::error!("database error: {}", err);
            StatusCode::INTERNAL_SERVER_ERROR
        }
    };

    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
