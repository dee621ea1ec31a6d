use crate::errors::AppError;
use crate::models::{ScoreReport, ScoreRequest};
use crate::scoring::ScoringService;
use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::json;
use std::sync::Arc;

/// Shared application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Scoring gateway wrapping the process-wide completion client.
    pub scoring: ScoringService,
}

/// Health check endpoint.
///
/// Returns the service status and version information.
///
/// # Returns
///
/// * `(StatusCode, Json<serde_json::Value>)` - HTTP 200 OK with health status JSON.
pub async fn health() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "healthy",
            "service": env!("CARGO_PKG_NAME"),
            "version": env!("CARGO_PKG_VERSION")
        })),
    )
}

/// POST /score-resume
///
/// Scores a resume against a job description via the completion API.
///
/// Both fields are validated before any remote call: an absent or empty
/// `resume` or `jobdesc` is a 400 with `{"error": "Missing input"}`. A body
/// that cannot be read as the expected shape is a 500 carrying the rejection
/// description. Once inputs are valid the response is always 200 - remote or
/// parse failures surface as the zeroed fallback report, never as an error
/// status.
///
/// # Arguments
///
/// * `state` - The application state.
/// * `payload` - JSON body containing `resume` and `jobdesc`.
///
/// # Returns
///
/// * `Result<Json<ScoreReport>, AppError>` - The score report or an error.
pub async fn score_resume(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<ScoreRequest>, JsonRejection>,
) -> Result<Json<ScoreReport>, AppError> {
    let Json(request) = payload.map_err(|rejection| AppError::InternalError(rejection.body_text()))?;

    if request.resume.is_empty() || request.jobdesc.is_empty() {
        return Err(AppError::MissingInput);
    }

    tracing::info!(
        "POST /score-resume - resume: {} chars, jobdesc: {} chars",
        request.resume.len(),
        request.jobdesc.len()
    );

    let report = state.scoring.score(&request.resume, &request.jobdesc).await;

    tracing::info!("Score report ready: score={}", report.score);
    Ok(Json(report))
}
