//! Gemini `generateContent` client.
//!
//! Sends the prompt as the only user content with no system instruction and no
//! generation config. No retries and no client-side timeout.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::clients::traits::{GenerationError, TextGenerator};
use crate::config::GeminiConfig;

pub const DEFAULT_MODEL: &str = "gemini-2.5-flash";
pub const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";

#[derive(Serialize)]
struct GenerateContentRequest<'a> {
    contents: Vec<Content<'a>>,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<TextPart<'a>>,
}

#[derive(Serialize)]
struct TextPart<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(rename = "promptFeedback")]
    prompt_feedback: Option<PromptFeedback>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
    #[serde(rename = "finishReason")]
    finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<ResponsePart>,
}

#[derive(Debug, Deserialize)]
struct ResponsePart {
    text: Option<String>,
}

#[derive(Debug, Deserialize)]
struct PromptFeedback {
    #[serde(rename = "blockReason")]
    block_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
    status: Option<String>,
}

#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    model: String,
    api_base: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            api_key: api_key.into(),
            model: model.into(),
            api_base: DEFAULT_API_BASE.to_string(),
        }
    }

    pub fn from_config(api_key: impl Into<String>, config: &GeminiConfig) -> Self {
        Self::new(api_key, config.model.clone()).with_api_base(config.api_base.clone())
    }

    /// Point the client at a different API root (proxies, local fakes).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    fn endpoint(&self) -> String {
        let model = self.model.strip_prefix("models/").unwrap_or(&self.model);
        format!("{}/models/{}:generateContent", self.api_base, model)
    }
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        tracing::debug!(
            "Calling Gemini generateContent (model={}, chars={})",
            self.model,
            prompt.len()
        );

        let body = GenerateContentRequest {
            contents: vec![Content {
                parts: vec![TextPart { text: prompt }],
            }],
        };

        let response = self
            .http
            .post(self.endpoint())
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| {
                GenerationError::CallFailed(format!("request to Gemini API failed: {}", e))
            })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            GenerationError::CallFailed(format!("error reading Gemini response body: {}", e))
        })?;

        if !status.is_success() {
            let detail = match serde_json::from_str::<ErrorEnvelope>(&text) {
                Ok(env) => match env.error.status {
                    Some(s) => format!("{} {}. {}", status.as_u16(), s, env.error.message),
                    None => format!("{}. {}", status.as_u16(), env.error.message),
                },
                Err(_) => format!("{}. {}", status.as_u16(), text.trim()),
            };
            return Err(GenerationError::CallFailed(detail));
        }

        let parsed: GenerateContentResponse = serde_json::from_str(&text).map_err(|e| {
            GenerationError::CallFailed(format!("invalid response JSON from Gemini API: {}", e))
        })?;

        extract_text(parsed)
    }
}

/// Concatenate the text parts of the first candidate, as received.
fn extract_text(response: GenerateContentResponse) -> Result<String, GenerationError> {
    let block_reason = response.prompt_feedback.and_then(|f| f.block_reason);
    let Some(candidate) = response.candidates.into_iter().next() else {
        return Err(GenerationError::CallFailed(match block_reason {
            Some(reason) => {
                format!("Gemini returned no candidates (prompt blocked: {})", reason)
            }
            None => "Gemini returned no candidates".to_string(),
        }));
    };

    let output: String = candidate
        .content
        .map(|c| c.parts.into_iter().filter_map(|p| p.text).collect())
        .unwrap_or_default();

    if output.is_empty() {
        return Err(GenerationError::CallFailed(match candidate.finish_reason {
            Some(reason) => {
                format!("Gemini response contained no text (finish reason: {})", reason)
            }
            None => "Gemini response contained no text".to_string(),
        }));
    }

    Ok(output)
}
