pub mod chat;
pub mod health;

use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{config::AppConfig, AppState};

/// All service routes, mounted at the root and again under `/api`.
pub fn create_router(state: AppState) -> Router {
    let api = Router::new()
        .route("/health/", get(health::health_check))
        .route("/ai/chat/", post(chat::ai_chat));

    let cors = cors_layer(&state.config);

    Router::new()
        .merge(api.clone())
        .nest("/api", api)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

// Origins are checked by `AppConfig::validate`
fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter(|origin| origin.as_str() != "*")
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true)
}
