use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Body returned when a request is accepted
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ApiResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Body returned for every failed request
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// User-facing message
    pub error: String,
    /// Per-field messages, present only for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<BTreeMap<String, String>>,
}

impl ApiResponse {
    pub fn success(message: Option<String>) -> Self {
        Self {
            success: true,
            message,
        }
    }
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            errors: None,
        }
    }

    pub fn with_fields(error: impl Into<String>, errors: BTreeMap<String, String>) -> Self {
        Self {
            error: error.into(),
            errors: Some(errors),
        }
    }
}
