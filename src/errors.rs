use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use std::fmt;

/// Application-specific error types surfaced as HTTP responses.
#[derive(Debug, Clone)]
pub enum AppError {
    /// Required request field absent or empty.
    MissingInput,
    /// Unexpected failure outside the handled remote-call path.
    InternalError(String),
}

impl fmt::Display for AppError {
    /// Formats the error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::MissingInput => write!(f, "Missing input"),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl IntoResponse for AppError {
    /// Converts the error into an HTTP response.
    ///
    /// Maps each error variant to an appropriate HTTP status code and JSON body.
    /// The internal-error description is echoed into the body; remote-call and
    /// parse failures never reach this path (they collapse to the fallback
    /// report in the scoring service).
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::MissingInput => (StatusCode::BAD_REQUEST, "Missing input".to_string()),
            AppError::InternalError(msg) => {
                tracing::error!("Internal error: {}", msg);
                (StatusCode::INTERNAL_SERVER_ERROR, msg.clone())
            }
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Failure kinds on the remote-call/parse path.
///
/// Both kinds collapse to the zeroed fallback report at the handler boundary;
/// the distinction exists so logs can tell a dead upstream from unusable
/// output.
#[derive(Debug)]
pub enum ScoreError {
    /// Network error, non-2xx status, or an unreadable completion response.
    Remote(String),
    /// The completion text did not yield a valid scoring object.
    Parse(String),
}

impl fmt::Display for ScoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScoreError::Remote(msg) => write!(f, "Completion API error: {}", msg),
            ScoreError::Parse(msg) => write!(f, "Completion parse error: {}", msg),
        }
    }
}

impl std::error::Error for ScoreError {}

impl From<reqwest::Error> for ScoreError {
    /// Converts a `reqwest::Error` into a `ScoreError`.
    fn from(err: reqwest::Error) -> Self {
        ScoreError::Remote(err.to_string())
    }
}
