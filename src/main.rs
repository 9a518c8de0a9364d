use advisor_api::{config::AppConfig, logging, openapi::ApiDoc, routes::create_router, AppState};
use anyhow::Context;
use axum::Router;
use utoipa::OpenApi;
use utoipa_redoc::{Redoc, Servable};
use utoipa_swagger_ui::SwaggerUi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env is optional
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;

    let _guard = logging::init_logging(&config)
        .context("Failed to initialize logging")?;

    let bind_addr = config.bind_addr.clone();
    tracing::info!(
        "Chat delay {}ms, positive probability {}",
        config.response_delay_ms,
        config.positive_probability
    );

    let app_state = AppState::from_config(config);

    let app = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Redoc::with_url("/redoc", ApiDoc::openapi()))
        .merge(create_router(app_state));

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", bind_addr))?;
    let local_addr = listener.local_addr()?;
    tracing::info!("🚀 Server started successfully");
    tracing::info!("    Swagger UI: http://{}/swagger-ui", local_addr);
    tracing::info!("    Redoc:      http://{}/redoc", local_addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}
