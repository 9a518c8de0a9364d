// tests/common/mod.rs
// Helpers shared between integration tests

#![allow(dead_code)]

use advisor_api::{
    classifier::{Classifier, RandomSource},
    config::AppConfig,
    routes::create_router,
    AppState,
};
use axum::{
    body::Body,
    http::Request,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use std::sync::Arc;

/// Always returns the same draw, for asserting each viability branch.
pub struct FixedRandom(pub bool);

impl RandomSource for FixedRandom {
    fn chance(&self, _probability: f64) -> bool {
        self.0
    }
}

/// Default config without the artificial chat delay
pub fn test_config() -> AppConfig {
    AppConfig {
        response_delay_ms: 0,
        ..AppConfig::default()
    }
}

pub fn create_test_app(config: AppConfig) -> Router {
    create_router(AppState::from_config(config))
}

/// App whose viability answers are always positive (`true`) or negative (`false`)
pub fn create_fixed_app(draw: bool) -> Router {
    let config = test_config();
    let classifier = Classifier::new(config.positive_probability, Box::new(FixedRandom(draw)));
    create_router(AppState {
        config: Arc::new(config),
        classifier: Arc::new(classifier),
    })
}

pub fn chat_request(uri: &str, body: impl Into<Body>) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(body.into())
        .unwrap()
}

pub async fn parse_response_body(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
