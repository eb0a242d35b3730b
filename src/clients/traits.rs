use async_trait::async_trait;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
    #[error("generation service is not configured")]
    NotConfigured,
    #[error("{0}")]
    CallFailed(String),
}

/// A remote text-generation backend: one prompt in, one text blob out.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;
}
