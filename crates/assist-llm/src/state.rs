//! Shared chat state and provider dispatch

use std::sync::Arc;

use assist_config::ProvidersConfig;

use crate::error::LlmError;
use crate::provider::gemini::GeminiProvider;
use crate::provider::solar::SolarProvider;
use crate::provider::{Provider, TextStream};
use crate::types::ChatMessage;

/// Model used when the inbound request names none
pub const DEFAULT_MODEL: &str = "solar-1-mini-chat";

/// Model-name prefix that selects the Gemini provider
const GEMINI_MODEL_PREFIX: &str = "gemini";

/// Shared state for chat route handlers
#[derive(Clone)]
pub struct LlmState {
    inner: Arc<LlmStateInner>,
}

struct LlmStateInner {
    solar: SolarProvider,
    gemini: GeminiProvider,
}

impl LlmState {
    /// Build both providers from configuration
    pub fn from_config(config: &ProvidersConfig) -> Self {
        Self {
            inner: Arc::new(LlmStateInner {
                solar: SolarProvider::new(&config.solar),
                gemini: GeminiProvider::new(&config.gemini),
            }),
        }
    }

    /// Select a provider by a purely syntactic check on the model name
    fn provider_for_model(&self, model: &str) -> &dyn Provider {
        if model.starts_with(GEMINI_MODEL_PREFIX) {
            &self.inner.gemini
        } else {
            &self.inner.solar
        }
    }

    /// Dispatch one chat request and return its normalized fragment stream
    ///
    /// # Errors
    ///
    /// Returns an error if the upstream call fails before streaming begins.
    pub async fn stream_chat(&self, model: Option<String>, messages: &[ChatMessage]) -> Result<TextStream, LlmError> {
        let model = model.unwrap_or_else(|| DEFAULT_MODEL.to_owned());
        let provider = self.provider_for_model(&model);

        tracing::debug!(provider = provider.name(), model = %model, "dispatching chat request");

        provider.stream_chat(&model, messages).await
    }
}
