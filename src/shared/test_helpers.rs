#[cfg(test)]
use crate::modules::sheets::{RowSink, SheetError};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use tokio::sync::Mutex;

/// Row sink that keeps appended rows in memory
#[cfg(test)]
#[derive(Default)]
pub struct InMemoryRowSink {
    rows: Mutex<Vec<Vec<String>>>,
}

#[cfg(test)]
impl InMemoryRowSink {
    pub async fn rows(&self) -> Vec<Vec<String>> {
        self.rows.lock().await.clone()
    }
}

#[cfg(test)]
#[async_trait]
impl RowSink for InMemoryRowSink {
    async fn append_row(&self, columns: Vec<String>) -> Result<(), SheetError> {
        self.rows.lock().await.push(columns);
        Ok(())
    }
}

/// Row sink standing in for an unreachable spreadsheet service
#[cfg(test)]
pub struct UnreachableRowSink;

#[cfg(test)]
#[async_trait]
impl RowSink for UnreachableRowSink {
    async fn append_row(&self, _columns: Vec<String>) -> Result<(), SheetError> {
        Err(SheetError::Request(
            "error sending request: connection refused".to_string(),
        ))
    }
}

#[cfg(test)]
pub fn valid_submission() -> crate::features::submissions::dtos::SubmitSurveyDto {
    crate::features::submissions::dtos::SubmitSurveyDto {
        occupation: "학생".to_string(),
        interest_reasons: vec!["포트폴리오를 만들고싶어서".to_string()],
        detailed_reason: "개인 프로젝트에 적용해보고 싶습니다".to_string(),
        email: String::new(),
        social_support: true,
    }
}
