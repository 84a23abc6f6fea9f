use std::sync::Arc;

use axum::{extract::State, Json};

use crate::core::error::{AppError, Result};
use crate::core::extractor::AppJson;
use crate::features::submissions::dtos::SubmitSurveyDto;
use crate::features::submissions::services::SubmissionService;
use crate::features::submissions::validation::validate;
use crate::shared::types::{ApiResponse, ErrorResponse};

/// Submit a survey response
///
/// Public endpoint used by the survey page. The payload is checked against
/// the same field rules as the form, then appended to the spreadsheet.
#[utoipa::path(
    post,
    path = "/api/submit",
    request_body = SubmitSurveyDto,
    responses(
        (status = 200, description = "Submission appended", body = ApiResponse),
        (status = 400, description = "Validation error or malformed body", body = ErrorResponse),
        (status = 500, description = "Spreadsheet could not be updated", body = ErrorResponse)
    ),
    tag = "submissions"
)]
pub async fn submit_survey(
    State(service): State<Arc<SubmissionService>>,
    AppJson(dto): AppJson<SubmitSurveyDto>,
) -> Result<Json<ApiResponse>> {
    let errors = validate(&dto);
    if !errors.is_empty() {
        tracing::debug!("Submission rejected: {}", errors);
        return Err(AppError::Validation(errors));
    }

    service.forward(dto).await?;
    Ok(Json(ApiResponse::success(None)))
}

#[cfg(test)]
mod tests {
    use crate::features::submissions::routes;
    use crate::features::submissions::services::SubmissionService;
    use crate::shared::constants::{OCCUPATION_TOO_SHORT_MESSAGE, SUBMISSION_FAILED_MESSAGE};
    use crate::shared::test_helpers::{InMemoryRowSink, UnreachableRowSink};
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use serde_json::json;
    use std::sync::Arc;

    fn scenario_payload() -> serde_json::Value {
        json!({
            "occupation": "학생",
            "interest_reasons": ["포트폴리오를 만들고싶어서"],
            "detailed_reason": "개인 프로젝트에 적용해보고 싶습니다",
            "email": "",
            "social_support": true
        })
    }

    #[tokio::test]
    async fn test_submit_appends_row() {
        let sink = Arc::new(InMemoryRowSink::default());
        let app = routes::routes(Arc::new(SubmissionService::new(sink.clone())));
        let server = TestServer::new(app).unwrap();

        let response = server.post("/api/submit").json(&scenario_payload()).await;

        response.assert_status_ok();
        response.assert_json(&json!({ "success": true }));

        let rows = sink.rows().await;
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0][4], "");
        assert_eq!(rows[0][5], "Y");
    }

    #[tokio::test]
    async fn test_submit_accepts_null_email() {
        let sink = Arc::new(InMemoryRowSink::default());
        let app = routes::routes(Arc::new(SubmissionService::new(sink.clone())));
        let server = TestServer::new(app).unwrap();

        let mut payload = scenario_payload();
        payload["email"] = serde_json::Value::Null;
        let response = server.post("/api/submit").json(&payload).await;

        response.assert_status_ok();
        assert_eq!(sink.rows().await[0][4], "");
    }

    #[tokio::test]
    async fn test_invalid_submission_is_never_forwarded() {
        let sink = Arc::new(InMemoryRowSink::default());
        let app = routes::routes(Arc::new(SubmissionService::new(sink.clone())));
        let server = TestServer::new(app).unwrap();

        let mut payload = scenario_payload();
        payload["occupation"] = json!("");
        let response = server.post("/api/submit").json(&payload).await;

        response.assert_status(StatusCode::BAD_REQUEST);
        response.assert_json(&json!({
            "error": OCCUPATION_TOO_SHORT_MESSAGE,
            "errors": { "occupation": OCCUPATION_TOO_SHORT_MESSAGE }
        }));
        assert!(sink.rows().await.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_spreadsheet_returns_generic_failure() {
        let app = routes::routes(Arc::new(SubmissionService::new(Arc::new(
            UnreachableRowSink,
        ))));
        let server = TestServer::new(app).unwrap();

        let response = server.post("/api/submit").json(&scenario_payload()).await;

        response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
        response.assert_json(&json!({ "error": SUBMISSION_FAILED_MESSAGE }));
    }

    #[tokio::test]
    async fn test_malformed_body_is_bad_request() {
        let sink = Arc::new(InMemoryRowSink::default());
        let app = routes::routes(Arc::new(SubmissionService::new(sink.clone())));
        let server = TestServer::new(app).unwrap();

        let response = server
            .post("/api/submit")
            .json(&json!({ "interest_reasons": "not-a-list" }))
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
        let body: serde_json::Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .starts_with("Invalid JSON data"));
        assert!(sink.rows().await.is_empty());
    }
}
