//! Domain-specific error types for brainstorm-studio

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use crate::clients::GenerationError;
use crate::models::GenerationResult;

pub const NOT_CONFIGURED_MESSAGE: &str =
    "Gemini API is not configured. Please set GEMINI_API_KEY environment variable.";
pub const MISSING_FIELDS_MESSAGE: &str = "Technique and Issue are required fields.";
pub const INTERNAL_SERVER_ERROR_MESSAGE: &str = "Internal server error";

/// Main error type for the brainstorm-studio server
#[derive(Error, Debug)]
pub enum BrainstormError {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Generation error: {message}")]
    Generation { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl BrainstormError {
    pub fn not_configured() -> Self {
        BrainstormError::Config {
            message: NOT_CONFIGURED_MESSAGE.to_string(),
        }
    }

    pub fn missing_fields() -> Self {
        BrainstormError::Validation {
            message: MISSING_FIELDS_MESSAGE.to_string(),
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            BrainstormError::Validation { .. } => StatusCode::BAD_REQUEST,
            BrainstormError::Config { .. }
            | BrainstormError::Generation { .. }
            | BrainstormError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Text placed in the `error` field of the JSON payload.
    pub fn client_message(&self) -> String {
        match self {
            BrainstormError::Config { message } | BrainstormError::Validation { message } => {
                message.clone()
            }
            BrainstormError::Generation { message } | BrainstormError::Internal { message } => {
                format!("An error occurred while generating content: {}", message)
            }
        }
    }
}

impl From<GenerationError> for BrainstormError {
    fn from(err: GenerationError) -> Self {
        match err {
            GenerationError::NotConfigured => BrainstormError::not_configured(),
            GenerationError::CallFailed(message) => BrainstormError::Generation { message },
        }
    }
}

impl From<serde_json::Error> for BrainstormError {
    fn from(err: serde_json::Error) -> Self {
        BrainstormError::Internal {
            message: format!("invalid JSON body: {}", err),
        }
    }
}

/// Convert BrainstormError to the `/generate` JSON failure payload
impl IntoResponse for BrainstormError {
    fn into_response(self) -> Response {
        match &self {
            BrainstormError::Validation { .. } => {
                tracing::debug!("Rejected generate request: {}", self)
            }
            _ => tracing::error!("Error in generate endpoint: {}", self),
        }
        GenerationResult::from(&self).into_response()
    }
}

/// Result type alias for brainstorm-studio operations
pub type Result<T> = std::result::Result<T, BrainstormError>;
