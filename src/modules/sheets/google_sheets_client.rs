//! Google Sheets REST client
//!
//! Each append loads the document metadata, picks the first sheet and appends
//! one row of raw values to it.

use async_trait::async_trait;
use serde::Deserialize;
use serde_json::json;
use std::sync::Arc;

use super::{RowSink, ServiceAccountTokenManager, SheetError};
use crate::core::config::GoogleSheetsConfig;

#[derive(Debug, Deserialize)]
struct SpreadsheetInfo {
    #[serde(default)]
    sheets: Vec<SheetEntry>,
}

#[derive(Debug, Deserialize)]
struct SheetEntry {
    properties: SheetProperties,
}

#[derive(Debug, Deserialize)]
struct SheetProperties {
    title: String,
    #[serde(default)]
    index: u32,
}

/// Response of `values:append`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendValuesResponse {
    #[serde(default)]
    updates: Option<AppendUpdates>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppendUpdates {
    #[serde(default)]
    updated_range: Option<String>,
}

/// Row sink backed by the first sheet of a Google spreadsheet
pub struct GoogleSheetsClient {
    token_manager: Arc<ServiceAccountTokenManager>,
    http_client: reqwest::Client,
    api_base_url: String,
    spreadsheet_id: String,
}

impl GoogleSheetsClient {
    pub fn new(config: &GoogleSheetsConfig) -> Self {
        let http_client = reqwest::Client::new();
        Self {
            token_manager: Arc::new(ServiceAccountTokenManager::new(
                config,
                http_client.clone(),
            )),
            http_client,
            api_base_url: config.api_base_url.clone(),
            spreadsheet_id: config.spreadsheet_id.clone(),
        }
    }

    fn spreadsheet_url(&self) -> String {
        format!(
            "{}/v4/spreadsheets/{}",
            self.api_base_url,
            urlencoding::encode(&self.spreadsheet_id)
        )
    }

    /// Title of the sheet with the lowest index
    async fn first_sheet_title(&self, access_token: &str) -> Result<String, SheetError> {
        let url = format!("{}?fields=sheets.properties", self.spreadsheet_url());

        let response = self
            .http_client
            .get(&url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| SheetError::Request(e.to_string()))?;

        let info: SpreadsheetInfo = Self::parse_response(response).await?;

        let title = info
            .sheets
            .into_iter()
            .min_by_key(|sheet| sheet.properties.index)
            .map(|sheet| sheet.properties.title)
            .ok_or(SheetError::NoSheets)?;

        tracing::debug!("Loaded spreadsheet info, first sheet: {}", title);
        Ok(title)
    }

    async fn append_values(
        &self,
        access_token: &str,
        sheet_title: &str,
        columns: Vec<String>,
    ) -> Result<(), SheetError> {
        let url = format!(
            "{}/values/{}:append?valueInputOption=RAW&insertDataOption=INSERT_ROWS",
            self.spreadsheet_url(),
            urlencoding::encode(&sheet_range(sheet_title))
        );

        let response = self
            .http_client
            .post(&url)
            .bearer_auth(access_token)
            .json(&json!({ "values": [columns] }))
            .send()
            .await
            .map_err(|e| SheetError::Request(e.to_string()))?;

        let appended: AppendValuesResponse = Self::parse_response(response).await?;

        tracing::debug!(
            "Appended row to {}",
            appended
                .updates
                .and_then(|u| u.updated_range)
                .unwrap_or_else(|| sheet_title.to_string())
        );
        Ok(())
    }

    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, SheetError> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(SheetError::Api {
                status: status.as_u16(),
                body,
            });
        }

        response
            .json()
            .await
            .map_err(|e| SheetError::Parse(e.to_string()))
    }
}

#[async_trait]
impl RowSink for GoogleSheetsClient {
    async fn append_row(&self, columns: Vec<String>) -> Result<(), SheetError> {
        let access_token = self.token_manager.get_access_token().await?;
        let sheet_title = self.first_sheet_title(&access_token).await?;
        self.append_values(&access_token, &sheet_title, columns)
            .await
    }
}

/// A1 range covering a whole sheet; quotes inside titles are doubled
fn sheet_range(title: &str) -> String {
    format!("'{}'", title.replace('\'', "''"))
}
