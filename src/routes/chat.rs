// src/routes/chat.rs
// Canned advisory chat replies

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use tracing::{debug, info};

use crate::{
    models::{ChatRequest, ChatResponse, ErrorResponse},
    AppError, AppState,
};

#[utoipa::path(
    post,
    path = "/ai/chat/",
    tag = "Chat",
    request_body(content = ChatRequest, description = "Question for the assistant", example = json!({ "message": "What is a CRUT?" })),
    responses(
        (status = 200, description = "Canned reply selected from the message keywords", body = ChatResponse),
        (status = 400, description = "Malformed request body", body = ErrorResponse)
    )
)]
pub async fn ai_chat(
    State(state): State<AppState>,
    payload: Result<Json<ChatRequest>, JsonRejection>,
) -> Result<Json<ChatResponse>, AppError> {
    let Json(request) = payload?;
    let message = request.message.unwrap_or_default();
    debug!("Chat message received ({} chars)", message.chars().count());

    let key = state.classifier.classify(&message);
    info!("Selected chat template {}", key.as_str());

    let delay = state.config.response_delay();
    if !delay.is_zero() {
        tokio::time::sleep(delay).await;
    }

    Ok(Json(key.template().to_response()))
}
