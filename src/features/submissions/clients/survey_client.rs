use tokio::sync::Mutex;

use crate::features::submissions::dtos::SubmitSurveyDto;
use crate::features::submissions::form_state::{FormState, SubmitOutcome};
use crate::features::submissions::validation::validate;
use crate::shared::constants::SUBMISSION_ALERT_MESSAGE;

/// Caller side of `POST /api/submit`
///
/// Runs the field rules locally first and only talks to the server for
/// well-formed submissions. One submission may be in flight at a time.
#[allow(dead_code)]
pub struct SurveyClient {
    http_client: reqwest::Client,
    submit_url: String,
    landing_url: String,
    state: Mutex<FormState>,
}

#[allow(dead_code)]
#[derive(Debug, thiserror::Error)]
enum SendError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Server responded with HTTP {0}")]
    Status(reqwest::StatusCode),
}

#[allow(dead_code)]
impl SurveyClient {
    pub fn new(base_url: &str, landing_url: impl Into<String>) -> Self {
        Self {
            http_client: reqwest::Client::new(),
            submit_url: format!("{}/api/submit", base_url.trim_end_matches('/')),
            landing_url: landing_url.into(),
            state: Mutex::new(FormState::default()),
        }
    }

    /// Snapshot of the current form state
    pub async fn state(&self) -> FormState {
        self.state.lock().await.clone()
    }

    pub async fn submit(&self, form: SubmitSurveyDto) -> SubmitOutcome {
        {
            let mut state = self.state.lock().await;
            if !state.begin_submit() {
                return SubmitOutcome::Busy;
            }

            let errors = validate(&form);
            if !errors.is_empty() {
                state.reject(errors.clone());
                return SubmitOutcome::Invalid(errors);
            }
        }

        let result = self.send(&form).await;
        self.state.lock().await.settle();

        match result {
            Ok(()) => SubmitOutcome::Redirect(self.landing_url.clone()),
            Err(e) => {
                tracing::warn!("Survey submission failed: {}", e);
                SubmitOutcome::Failed(SUBMISSION_ALERT_MESSAGE.to_string())
            }
        }
    }

    async fn send(&self, form: &SubmitSurveyDto) -> Result<(), SendError> {
        let response = self
            .http_client
            .post(&self.submit_url)
            .json(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(SendError::Status(response.status()));
        }
        Ok(())
    }
}
