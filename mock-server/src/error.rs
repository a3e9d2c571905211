use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Failures a handler can report. Every variant renders as
/// `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    InvalidJson(#[from] JsonRejection),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = match &self {
            AppError::BadRequest(msg) => msg.clone(),
            AppError::InvalidJson(rejection) => rejection.body_text(),
        };
        tracing::debug!(error = %message, "rejecting request");
        (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
    }
}
