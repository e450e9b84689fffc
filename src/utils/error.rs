use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::error;

use super::response::ErrorResponse;

/// Application-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Inbound payload did not match the expected shape.
    #[error("unprocessable request: {0}")]
    UnprocessableRequest(String),

    /// The generation API call failed (network, quota, malformed response).
    #[error("generation API call failed: {0}")]
    CompletionFailed(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::UnprocessableRequest(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::CompletionFailed(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn error_code(&self) -> String {
        match self {
            AppError::UnprocessableRequest(_) => "COMMON422",
            AppError::CompletionFailed(_) => "AI_003",
            AppError::Internal(_) => "COMMON500",
        }
        .to_string()
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_code = self.error_code();
        let message = self.to_string();

        match &self {
            AppError::Internal(_) => error!("Internal Server Error: {}", message),
            _ => error!("Error [{}]: {}", error_code, message),
        }

        let error_response = ErrorResponse::new(error_code, message);

        (status, Json(error_response)).into_response()
    }
}

/// A failed `Json` extraction is rejected before any handler logic runs.
impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::UnprocessableRequest(rejection.body_text())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_map_unprocessable_request_to_422() {
        let error = AppError::UnprocessableRequest("missing field".to_string());

        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);
        assert_eq!(error.error_code(), "COMMON422");
    }

    #[test]
    fn should_map_completion_failure_to_503() {
        let error = AppError::CompletionFailed("quota exceeded".to_string());

        assert_eq!(error.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(error.error_code(), "AI_003");
    }

    #[test]
    fn should_map_internal_error_to_500() {
        let error = AppError::Internal("boom".to_string());

        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(error.error_code(), "COMMON500");
    }

    #[test]
    fn should_include_cause_in_display() {
        let error = AppError::CompletionFailed("connection refused".to_string());

        assert!(error.to_string().contains("connection refused"));
    }
}
