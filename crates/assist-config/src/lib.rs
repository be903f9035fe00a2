//! Configuration for the assist gateway
//!
//! Configuration is a TOML file with `{{ env.VAR }}` placeholders expanded
//! before deserialization, so secrets stay out of the file itself.

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod env;
mod loader;

use std::net::SocketAddr;

use secrecy::SecretString;
use serde::Deserialize;
use url::Url;

/// Top-level gateway configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Upstream provider settings
    #[serde(default)]
    pub providers: ProvidersConfig,
}

/// HTTP server settings
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerConfig {
    /// Address to bind; defaults to `0.0.0.0:3000` when absent
    #[serde(default)]
    pub listen_address: Option<SocketAddr>,
    /// Health endpoint settings
    #[serde(default)]
    pub health: HealthConfig,
}

/// Health endpoint settings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health endpoint is served
    #[serde(default = "default_true")]
    pub enabled: bool,
    /// Route path for the health endpoint
    #[serde(default = "default_health_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            path: default_health_path(),
        }
    }
}

const fn default_true() -> bool {
    true
}

fn default_health_path() -> String {
    "/health".to_owned()
}

/// Settings for both upstream providers
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProvidersConfig {
    /// Upstage Solar (OpenAI-style chat completions)
    #[serde(default)]
    pub solar: ProviderConfig,
    /// Google Gemini (Generative Language API)
    #[serde(default)]
    pub gemini: ProviderConfig,
}

/// Settings for a single upstream provider
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ProviderConfig {
    /// API key for authentication; resolved once at load, never logged
    #[serde(default)]
    pub api_key: Option<SecretString>,
    /// Base URL override (used by tests to point at mock upstreams)
    #[serde(default)]
    pub base_url: Option<Url>,
}

impl ProviderConfig {
    /// Whether this provider can plausibly serve requests
    fn is_configured(&self) -> bool {
        self.api_key.is_some() || self.base_url.is_some()
    }
}

impl Config {
    /// Validate that the configuration is internally consistent
    ///
    /// # Errors
    ///
    /// Returns an error if neither provider has credentials or a base URL.
    pub fn validate(&self) -> anyhow::Result<()> {
        if !self.providers.solar.is_configured() && !self.providers.gemini.is_configured() {
            anyhow::bail!("at least one provider must be configured (solar or gemini)");
        }
        Ok(())
    }
}
