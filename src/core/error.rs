use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::features::submissions::validation::FormErrors;
use crate::shared::constants::{INTERNAL_ERROR_MESSAGE, SUBMISSION_FAILED_MESSAGE};
use crate::shared::types::ErrorResponse;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(FormErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal server error: {0}")]
    Internal(String),

    /// Forwarding to the spreadsheet failed. The detail is logged, never returned.
    #[error("Submission failed: {0}")]
    SubmissionFailed(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Validation(errors) => {
                let message = errors
                    .first_message()
                    .unwrap_or("Validation failed")
                    .to_string();
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::with_fields(message, errors.into_field_map()),
                )
            }
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
            AppError::Internal(msg) => {
                tracing::error!("Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(INTERNAL_ERROR_MESSAGE),
                )
            }
            AppError::SubmissionFailed(detail) => {
                tracing::error!("Submission error: {}", detail);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(SUBMISSION_FAILED_MESSAGE),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::submissions::validation::FormField;

    async fn body_json(response: Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_submission_failure_hides_detail() {
        let response =
            AppError::SubmissionFailed("invalid_grant: bad signature".to_string()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = body_json(response).await;
        assert_eq!(body, serde_json::json!({ "error": SUBMISSION_FAILED_MESSAGE }));
    }

    #[tokio::test]
    async fn test_validation_error_lists_fields() {
        let mut errors = FormErrors::default();
        errors.insert(FormField::Occupation, "too short");
        let response = AppError::Validation(errors).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = body_json(response).await;
        assert_eq!(body["error"], "too short");
        assert_eq!(body["errors"]["occupation"], "too short");
    }
}
