//! Programmatic configuration builder for integration tests

use std::net::SocketAddr;

use murmur_config::{AuthConfig, Config, EngineConfig, HealthConfig, ServerConfig};
use secrecy::SecretString;

/// Bearer token used by tests unless overridden
pub const TEST_TOKEN: &str = "test-token";

/// Builder for constructing test configurations
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Create a new builder with minimal defaults
    ///
    /// The engine section points at a placeholder model path; tests inject
    /// a stub engine, so no model is ever loaded.
    pub fn new() -> Self {
        Self {
            config: Config {
                server: ServerConfig {
                    listen_address: Some(SocketAddr::from(([127, 0, 0, 1], 0))),
                    health: HealthConfig::default(),
                },
                auth: AuthConfig {
                    token: SecretString::from(TEST_TOKEN),
                    public_paths: vec!["/health".to_owned()],
                },
                engine: EngineConfig {
                    model_path: "unused-by-tests.bin".into(),
                    ..EngineConfig::default()
                },
                telemetry: None,
            },
        }
    }

    /// Override the bearer token
    pub fn with_token(mut self, token: &str) -> Self {
        self.config.auth.token = SecretString::from(token);
        self
    }

    /// Disable the health endpoint
    pub fn without_health(mut self) -> Self {
        self.config.server.health.enabled = false;
        self
    }

    /// Build the final config
    pub fn build(self) -> Config {
        self.config
    }
}
