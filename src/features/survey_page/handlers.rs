use std::sync::Arc;

use axum::{extract::State, response::Html};
use minijinja::context;

use crate::core::error::{AppError, Result};
use crate::shared::constants::{
    DETAILED_REASON_MIN_CHARS, DETAILED_REASON_TOO_SHORT_MESSAGE, INTEREST_REASONS,
    INVALID_EMAIL_MESSAGE, NO_REASON_SELECTED_MESSAGE, OCCUPATION_MIN_CHARS,
    OCCUPATION_TOO_SHORT_MESSAGE, SUBMISSION_ALERT_MESSAGE,
};
use crate::shared::templates::{render_template, SURVEY_PAGE_TEMPLATE};
use crate::shared::validation::EMAIL_REGEX;

/// Values the page needs besides its static markup
#[derive(Debug, Clone)]
pub struct PageSettings {
    pub landing_url: String,
}

pub async fn survey_page(State(settings): State<Arc<PageSettings>>) -> Result<Html<String>> {
    let html = render_template(
        SURVEY_PAGE_TEMPLATE,
        context! {
            reasons => INTEREST_REASONS.to_vec(),
            submit_url => "/api/submit",
            landing_url => settings.landing_url.as_str(),
            alert_message => SUBMISSION_ALERT_MESSAGE,
            rules => context! {
                occupation_min_chars => OCCUPATION_MIN_CHARS,
                detailed_reason_min_chars => DETAILED_REASON_MIN_CHARS,
                email_pattern => EMAIL_REGEX.as_str(),
                occupation_message => OCCUPATION_TOO_SHORT_MESSAGE,
                interest_reasons_message => NO_REASON_SELECTED_MESSAGE,
                detailed_reason_message => DETAILED_REASON_TOO_SHORT_MESSAGE,
                email_message => INVALID_EMAIL_MESSAGE,
            },
        },
    )
    .map_err(|e| AppError::Internal(e.to_string()))?;

    Ok(Html(html))
}
