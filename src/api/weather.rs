use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use super::error_response;
use crate::state::AppState;
use crate::weather;

pub async fn get_weather(State(state): State<AppState>) -> impl IntoResponse {
    match weather::fetch_weather(&state.weather_url).await {
        Ok(body) => (StatusCode::OK, Json(body)).into_response(),
        Err(e) => error_response(e),
    }
}
