//! Request and response payloads for the `/generate` route.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

use crate::error::{BrainstormError, Result};

/// Body posted by the application page. Every field is optional on the wire so
/// that a missing `technique` or `issue` surfaces as a validation failure
/// rather than a decode failure.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerationRequest {
    #[serde(default)]
    pub technique: Option<String>,
    #[serde(default)]
    pub business_area: Option<String>,
    /// Persona name; the browser form calls this field `icon`.
    #[serde(default, rename = "icon")]
    pub persona: Option<String>,
    #[serde(default)]
    pub issue: Option<String>,
    #[serde(default)]
    pub assumptions: Option<String>,
}

impl GenerationRequest {
    /// Build the prompt for this request. Fails with a validation error when
    /// `technique` or `issue` is missing or blank.
    pub fn to_prompt(&self) -> Result<String> {
        let technique = self.technique.as_deref().unwrap_or_default();
        let issue = self.issue.as_deref().unwrap_or_default();
        crate::prompt::build_prompt(
            technique,
            self.business_area.as_deref(),
            self.persona.as_deref(),
            issue,
            self.assumptions.as_deref(),
        )
    }
}

/// Outcome relayed to the browser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum GenerationResult {
    Success {
        success: bool,
        output: String,
    },
    Failure {
        success: bool,
        error: String,
        #[serde(skip)]
        status_code: u16,
    },
}

impl GenerationResult {
    pub fn success(output: String) -> Self {
        GenerationResult::Success {
            success: true,
            output,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            GenerationResult::Success { .. } => StatusCode::OK,
            GenerationResult::Failure { status_code, .. } => StatusCode::from_u16(*status_code)
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
        }
    }
}

impl From<&BrainstormError> for GenerationResult {
    fn from(err: &BrainstormError) -> Self {
        GenerationResult::Failure {
            success: false,
            error: err.client_message(),
            status_code: err.status_code().as_u16(),
        }
    }
}

impl IntoResponse for GenerationResult {
    fn into_response(self) -> Response {
        (self.status_code(), Json(self)).into_response()
    }
}
