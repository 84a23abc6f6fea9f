use chrono::Utc;
use std::sync::Arc;

use crate::core::error::{AppError, Result};
use crate::features::submissions::dtos::SubmitSurveyDto;
use crate::features::submissions::models::SheetRow;
use crate::modules::sheets::RowSink;
use crate::shared::constants::INTEREST_REASONS;

/// Forwards validated survey submissions to the spreadsheet
pub struct SubmissionService {
    sink: Arc<dyn RowSink>,
}

impl SubmissionService {
    pub fn new(sink: Arc<dyn RowSink>) -> Self {
        Self { sink }
    }

    /// Stamp, normalize and append one submission as a new row.
    ///
    /// Every sink failure collapses into [`AppError::SubmissionFailed`]. The
    /// sink detail rides along in the error and is logged once, when the error
    /// becomes a response. Identical submissions append duplicate rows.
    pub async fn forward(&self, dto: SubmitSurveyDto) -> Result<()> {
        let unknown = dto
            .interest_reasons
            .iter()
            .filter(|reason| !INTEREST_REASONS.contains(&reason.as_str()))
            .count();
        if unknown > 0 {
            tracing::warn!("Submission carries {} unrecognized interest reason(s)", unknown);
        }

        let row = SheetRow::from_submission(dto, Utc::now());
        let timestamp = row.timestamp.clone();

        self.sink
            .append_row(row.into_columns())
            .await
            .map_err(|e| AppError::SubmissionFailed(e.to_string()))?;

        tracing::info!("Submission appended: timestamp={}", timestamp);

        Ok(())
    }
}
