use std::io::Write;
use std::sync::Arc;

use murmur_config::Config;

use crate::engine::whisper::WhisperEngine;
use crate::engine::{Engine, TranscribeOptions, Transcription};
use crate::error::Result;

/// Transcription server owning the long-lived engine
pub struct Server {
    engine: Arc<dyn Engine>,
}

impl Server {
    /// Wrap an existing engine; used by tests to inject stubs
    pub fn with_engine(engine: Arc<dyn Engine>) -> Self {
        Self { engine }
    }

    /// Spool audio bytes to a scoped temp file and run inference
    ///
    /// The temp file is removed on every exit path, success or failure,
    /// when the guard drops.
    pub(crate) async fn transcribe_bytes(
        &self,
        audio: &[u8],
        suffix: &str,
        options: TranscribeOptions,
    ) -> Result<Transcription> {
        let mut spool = tempfile::Builder::new().prefix("murmur-").suffix(suffix).tempfile()?;
        spool.write_all(audio)?;
        spool.flush()?;

        tracing::debug!(
            bytes = audio.len(),
            task = options.task.as_str(),
            language = options.language.as_deref().unwrap_or("auto"),
            "running transcription"
        );

        self.engine.transcribe(spool.path(), options).await
    }
}

/// Builder for constructing the transcription server from configuration
pub struct ServerBuilder<'a> {
    config: &'a Config,
}

impl<'a> ServerBuilder<'a> {
    pub const fn new(config: &'a Config) -> Self {
        Self { config }
    }

    /// Load the configured engine
    ///
    /// # Errors
    ///
    /// Returns an error if the model cannot be loaded
    pub fn build(self) -> Result<Server> {
        let engine = WhisperEngine::new(&self.config.engine)?;

        tracing::debug!(engine = engine.name(), "transcription engine ready");

        Ok(Server {
            engine: Arc::new(engine),
        })
    }
}
