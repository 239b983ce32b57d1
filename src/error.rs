use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;

use crate::forms::UpstreamError;

#[derive(Debug)]
pub enum AppError {
    Validation(Vec<String>),
    Upstream(UpstreamError),
}

impl std::fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Validation(msgs) => write!(f, "Validation failed: {}", msgs.join("; ")),
            AppError::Upstream(err) => write!(f, "Upstream error: {err}"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Validation(msgs) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                axum::Json(json!({ "validationErrors": msgs })),
            )
                .into_response(),
            AppError::Upstream(err) => {
                tracing::error!("Upstream error: {err}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    axum::Json(json!({ "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

impl From<UpstreamError> for AppError {
    fn from(err: UpstreamError) -> Self {
        AppError::Upstream(err)
    }
}
