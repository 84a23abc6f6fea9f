use chrono::{DateTime, SecondsFormat, Utc};

use crate::features::submissions::dtos::SubmitSurveyDto;

/// A submission normalized into spreadsheet cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRow {
    /// ISO-8601 UTC with millisecond precision, e.g. `2024-05-01T09:30:00.000Z`
    pub timestamp: String,
    pub occupation: String,
    /// Selected reasons joined with ", "
    pub interest_reasons: String,
    pub detailed_reason: String,
    /// Empty when no email was supplied
    pub email: String,
    /// "Y" or "N"
    pub social_support: String,
}

impl SheetRow {
    pub fn from_submission(dto: SubmitSurveyDto, submitted_at: DateTime<Utc>) -> Self {
        Self {
            timestamp: submitted_at.to_rfc3339_opts(SecondsFormat::Millis, true),
            occupation: dto.occupation,
            interest_reasons: dto.interest_reasons.join(", "),
            detailed_reason: dto.detailed_reason,
            email: dto.email,
            social_support: if dto.social_support { "Y" } else { "N" }.to_string(),
        }
    }

    /// Cells in column order: timestamp, occupation, interest_reasons,
    /// detailed_reason, email, social_support
    pub fn into_columns(self) -> Vec<String> {
        vec![
            self.timestamp,
            self.occupation,
            self.interest_reasons,
            self.detailed_reason,
            self.email,
            self.social_support,
        ]
    }
}
