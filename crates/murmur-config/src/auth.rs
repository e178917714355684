use secrecy::SecretString;
use serde::Deserialize;

/// Environment variable consulted when no token is set in the config file
pub const TOKEN_ENV_VAR: &str = "MURMUR_API_TOKEN";

/// Fallback token used when neither the config file nor the environment
/// provides one. Deployments are expected to override it.
pub const DEFAULT_TOKEN: &str = "changeme123";

/// Bearer-token authentication configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthConfig {
    /// Shared secret compared verbatim against `Authorization: Bearer <token>`
    #[serde(default = "default_token")]
    pub token: SecretString,
    /// Request paths exempt from authentication
    #[serde(default = "default_public_paths")]
    pub public_paths: Vec<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token: default_token(),
            public_paths: default_public_paths(),
        }
    }
}

fn default_token() -> SecretString {
    SecretString::from(std::env::var(TOKEN_ENV_VAR).unwrap_or_else(|_| DEFAULT_TOKEN.to_string()))
}

fn default_public_paths() -> Vec<String> {
    vec!["/health".to_string()]
}
