use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;

use super::error_response;
use crate::seed::seed_demo_data;
use crate::state::AppState;

pub async fn seed_database(State(state): State<AppState>) -> impl IntoResponse {
    match seed_demo_data(&state.db).await {
        Ok(()) => (
            StatusCode::OK,
            Json(json!({ "message": "Database seeded successfully" })),
        )
            .into_response(),
        Err(e) => error_response(e),
    }
}
