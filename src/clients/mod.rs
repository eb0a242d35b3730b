pub mod gemini;
pub mod traits;

use std::sync::Arc;

pub use gemini::GeminiClient;
pub use traits::{GenerationError, TextGenerator};

/// Boundary around the single outbound generation call.
///
/// Built once at startup. A gateway without a backend stays unconfigured for
/// the life of the process and fails every call without touching the network.
#[derive(Clone, Default)]
pub struct GenerationGateway {
    backend: Option<Arc<dyn TextGenerator>>,
}

impl GenerationGateway {
    pub fn new(backend: Arc<dyn TextGenerator>) -> Self {
        Self {
            backend: Some(backend),
        }
    }

    pub fn unconfigured() -> Self {
        Self { backend: None }
    }

    /// Gemini-backed gateway when a credential is present, unconfigured otherwise.
    pub fn from_config(config: &crate::config::Config) -> Self {
        match config.gemini.api_key.as_deref() {
            Some(key) => Self::new(Arc::new(GeminiClient::from_config(key, &config.gemini))),
            None => Self::unconfigured(),
        }
    }

    pub fn is_configured(&self) -> bool {
        self.backend.is_some()
    }

    pub async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let backend = self.backend.as_ref().ok_or(GenerationError::NotConfigured)?;
        backend.generate(prompt).await
    }
}

impl std::fmt::Debug for GenerationGateway {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GenerationGateway")
            .field("configured", &self.is_configured())
            .finish()
    }
}
