//! Spreadsheet store of record
//!
//! Submissions are appended as rows through the narrow [`RowSink`] interface.
//! The production sink talks to the Google Sheets REST API using a service
//! account; tests swap in an in-memory sink.

mod google_sheets_client;
mod service_account;

use async_trait::async_trait;
use thiserror::Error;

pub use google_sheets_client::GoogleSheetsClient;
pub use service_account::{ServiceAccountTokenManager, TokenError};

/// Append-only row destination
#[async_trait]
pub trait RowSink: Send + Sync {
    /// Append one row whose cells are `columns`, in order
    async fn append_row(&self, columns: Vec<String>) -> Result<(), SheetError>;
}

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] TokenError),

    #[error("Request to spreadsheet service failed: {0}")]
    Request(String),

    #[error("Spreadsheet service returned HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("Failed to parse spreadsheet response: {0}")]
    Parse(String),

    #[error("Spreadsheet has no sheets")]
    NoSheets,
}
