use std::sync::Arc;

use axum::{routing::post, Router};

use crate::features::submissions::handlers;
use crate::features::submissions::services::SubmissionService;

/// Create routes for the submissions feature
///
/// Note: This feature is public (no authentication required) as it backs the
/// survey page form.
pub fn routes(service: Arc<SubmissionService>) -> Router {
    Router::new()
        .route("/api/submit", post(handlers::submit_survey))
        .with_state(service)
}
