//! Upstage Solar provider implementation

use async_trait::async_trait;
use assist_config::ProviderConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Provider, TextStream};
use crate::error::LlmError;
use crate::protocol::solar::SolarRequest;
use crate::stream::{SseLineDecoder, fragment_stream};
use crate::types::ChatMessage;

/// Default Upstage Solar API base URL
const DEFAULT_BASE_URL: &str = "https://api.upstage.ai/v1/solar";

/// Upstage Solar (OpenAI-style chat completions) provider
pub struct SolarProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl SolarProvider {
    /// Create from provider configuration
    ///
    /// # Panics
    ///
    /// Panics if the hardcoded default base URL is invalid (should never happen).
    pub fn new(config: &ProviderConfig) -> Self {
        let base_url = config
            .base_url
            .clone()
            .unwrap_or_else(|| Url::parse(DEFAULT_BASE_URL).expect("valid default URL"));

        Self {
            client: Client::new(),
            base_url,
            api_key: config.api_key.clone(),
        }
    }

    /// Build the chat completions URL
    fn completions_url(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}/chat/completions")
    }
}

#[async_trait]
impl Provider for SolarProvider {
    fn name(&self) -> &str {
        "solar"
    }

    async fn stream_chat(&self, model: &str, messages: &[ChatMessage]) -> Result<TextStream, LlmError> {
        let wire_request = SolarRequest::new(model, messages);

        let mut builder = self.client.post(self.completions_url()).json(&wire_request);
        if let Some(key) = &self.api_key {
            builder = builder.bearer_auth(key.expose_secret());
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(provider = "solar", error = %e, "upstream request failed");
            LlmError::Streaming(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "solar", status = %status, "upstream returned error");
            return Err(LlmError::Upstream { status, body });
        }

        Ok(Box::pin(fragment_stream(response.bytes_stream(), SseLineDecoder::new())))
    }
}
