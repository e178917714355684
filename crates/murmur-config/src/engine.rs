use std::path::PathBuf;

use serde::Deserialize;

/// Transcription engine configuration
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EngineConfig {
    /// Path to the GGML model file loaded at startup
    pub model_path: PathBuf,
    /// Beam width for beam-search decoding
    #[serde(default = "default_beam_size")]
    pub beam_size: u32,
    /// Threads handed to the inference call
    #[serde(default = "default_threads")]
    pub threads: u32,
    /// Maximum number of inferences running at once; further requests wait
    #[serde(default = "default_max_concurrency")]
    pub max_concurrency: usize,
    /// Upload body limit in bytes
    #[serde(default = "default_body_limit_bytes")]
    pub body_limit_bytes: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::new(),
            beam_size: default_beam_size(),
            threads: default_threads(),
            max_concurrency: default_max_concurrency(),
            body_limit_bytes: default_body_limit_bytes(),
        }
    }
}

const fn default_beam_size() -> u32 {
    5
}

fn default_threads() -> u32 {
    u32::try_from(std::thread::available_parallelism().map_or(4, std::num::NonZeroUsize::get)).unwrap_or(4)
}

const fn default_max_concurrency() -> usize {
    1
}

/// 32 MiB, matching the upload extractor's ceiling
const fn default_body_limit_bytes() -> usize {
    32 << 20
}
