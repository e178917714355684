#![allow(clippy::must_use_candidate)]

pub mod auth;
pub mod engine;
mod env;
pub mod health;
mod loader;
pub mod server;
pub mod telemetry;

use serde::Deserialize;

pub use auth::*;
pub use engine::*;
pub use health::*;
pub use server::*;
pub use telemetry::{LogFormat, TelemetryConfig};

/// Top-level Murmur configuration
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,
    /// Bearer-token authentication
    #[serde(default)]
    pub auth: AuthConfig,
    /// Transcription engine configuration
    #[serde(default)]
    pub engine: EngineConfig,
    /// Telemetry configuration
    #[serde(default)]
    pub telemetry: Option<TelemetryConfig>,
}
