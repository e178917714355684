use serde::Deserialize;

/// Health endpoint configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HealthConfig {
    /// Whether the health endpoint is exposed
    #[serde(default = "default_enabled")]
    pub enabled: bool,
    /// Route path for the health endpoint
    #[serde(default = "default_path")]
    pub path: String,
}

impl Default for HealthConfig {
    fn default() -> Self {
        Self {
            enabled: default_enabled(),
            path: default_path(),
        }
    }
}

fn default_enabled() -> bool {
    true
}

fn default_path() -> String {
    "/health".to_string()
}
