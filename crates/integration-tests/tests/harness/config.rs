//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use assist_config::{Config, ProviderConfig};
use secrecy::SecretString;

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    pub fn new() -> Self {
        let mut config = Config::default();
        config.server.listen_address = Some(SocketAddr::from(([127, 0, 0, 1], 0)));
        Self { config }
    }

    /// Point the Solar provider at a mock backend
    pub fn with_solar(mut self, base_url: &str) -> Self {
        self.config.providers.solar = ProviderConfig {
            api_key: Some(SecretString::from("test-solar-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
        };
        self
    }

    /// Point the Gemini provider at a mock backend
    pub fn with_gemini(mut self, base_url: &str) -> Self {
        self.config.providers.gemini = ProviderConfig {
            api_key: Some(SecretString::from("test-gemini-key")),
            base_url: Some(base_url.parse().expect("valid URL")),
        };
        self
    }

    /// Finish building
    pub fn build(self) -> Config {
        self.config
    }
}
