//! Google Gemini provider implementation

use async_trait::async_trait;
use assist_config::ProviderConfig;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use url::Url;

use super::{Provider, TextStream};
use crate::error::LlmError;
use crate::protocol::gemini::GeminiRequest;
use crate::stream::{JsonObjectDecoder, fragment_stream};
use crate::types::ChatMessage;

/// Default Google Generative Language API base URL
const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Google Gemini (Generative Language API) provider
///
/// The API has no per-request stream flag; `streamGenerateContent` responds
/// incrementally on its own and the body is read as it arrives.
pub struct GeminiProvider {
    client: Client,
    base_url: Url,
    api_key: Option<SecretString>,
}

impl GeminiProvider {
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

    /// Build the `streamGenerateContent` endpoint URL for a model
    ///
    /// The API key travels as a query parameter, not a header.
    fn stream_url(&self, model: &str, api_key: Option<&str>) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        let mut url = format!("{base}/models/{model}:streamGenerateContent");
        if let Some(key) = api_key {
            use std::fmt::Write;
            let _ = write!(url, "?key={key}");
        }
        url
    }
}

#[async_trait]
impl Provider for GeminiProvider {
    fn name(&self) -> &str {
        "gemini"
    }

    async fn stream_chat(&self, model: &str, messages: &[ChatMessage]) -> Result<TextStream, LlmError> {
        let wire_request = GeminiRequest::new(messages);

        let api_key = self.api_key.as_ref().map(|k| k.expose_secret().to_owned());
        let url = self.stream_url(model, api_key.as_deref());

        let response = self.client.post(&url).json(&wire_request).send().await.map_err(|e| {
            // The request URL embeds the API key; strip it before logging
            let e = e.without_url();
            tracing::error!(provider = "gemini", error = %e, "upstream request failed");
            LlmError::Streaming(e.to_string())
        })?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(provider = "gemini", status = %status, "upstream returned error");
            return Err(LlmError::Upstream { status, body });
        }

        Ok(Box::pin(fragment_stream(
            response.bytes_stream(),
            JsonObjectDecoder::new(),
        )))
    }
}
