mod completion_client;
mod config;
mod errors;
mod handlers;
mod models;
mod scoring;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::completion_client::CompletionClient;
use crate::config::Config;
use crate::scoring::ScoringService;

/// Main entry point for the application.
///
/// This function initializes the application, including:
/// - Logging and tracing.
/// - Configuration loading.
/// - The process-wide completion API client.
/// - HTTP routes and middleware (CORS, request tracing, body size limit).
///
/// It then starts the Axum server.
///
/// # Returns
///
/// * `anyhow::Result<()>` - Ok if the server runs successfully, or an error if initialization fails.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resume_score_api=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = Config::from_env()?;

    // One completion client for the process lifetime, shared by every request
    let completion_client = CompletionClient::new(
        config.openai_base_url.clone(),
        config.openai_api_key.clone(),
        config.openai_model.clone(),
    )
    .map_err(|e| anyhow::anyhow!("Failed to initialize completion client: {}", e))?;
    tracing::info!(
        "✓ Completion client initialized: {} ({})",
        config.openai_base_url,
        config.openai_model
    );

    // Build application state
    let app_state = Arc::new(handlers::AppState {
        scoring: ScoringService::new(completion_client),
    });

    // Build routes; scoring payloads are small, 1MB covers any real resume
    let app = Router::new()
        .route("/health", get(handlers::health))
        .route("/score-resume", post(handlers::score_resume))
        .with_state(app_state)
        .layer(ServiceBuilder::new().layer(RequestBodyLimitLayer::new(1024 * 1024)))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
