use std::sync::Arc;

use axum::{routing::get, Router};

use crate::features::survey_page::handlers::{self, PageSettings};

pub fn routes(settings: Arc<PageSettings>) -> Router {
    Router::new()
        .route("/", get(handlers::survey_page))
        .with_state(settings)
}
