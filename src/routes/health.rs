use crate::{models::HealthResponse, AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

/// Health check endpoint
#[utoipa::path(
    get,
    path = "/health/",
    tag = "System",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    )
)]
pub async fn health_check(State(state): State<AppState>) -> impl IntoResponse {
    let body = HealthResponse {
        status: "healthy".to_string(),
        message: format!("{} is running", state.config.service_name),
    };
    (StatusCode::OK, Json(body))
}
