pub(crate) mod whisper;

use std::path::Path;

use async_trait::async_trait;

/// Inference task requested by the client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Task {
    /// Output in the language of the input audio
    Transcribe,
    /// Output forced to English
    Translate,
}

impl Task {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Transcribe => "transcribe",
            Self::Translate => "translate",
        }
    }
}

/// Per-request decoding options forwarded to the engine
#[derive(Debug, Clone)]
pub struct TranscribeOptions {
    /// Language hint (ISO 639-1); auto-detect when absent
    pub language: Option<String>,
    pub task: Task,
}

/// A contiguous span of recognized speech
#[derive(Debug, Clone)]
pub struct Segment {
    /// Start offset in seconds
    pub start: f64,
    /// End offset in seconds
    pub end: f64,
    pub text: String,
}

/// Full inference result for one audio file
#[derive(Debug, Clone)]
pub struct Transcription {
    /// Segments in emission order
    pub segments: Vec<Segment>,
    /// Detected language code
    pub language: String,
    /// Source audio duration in seconds
    pub duration: f64,
}

impl Transcription {
    /// Concatenate all segment texts, in order, with no separator
    pub fn transcript(&self) -> String {
        self.segments.iter().map(|s| s.text.as_str()).collect()
    }
}

/// Trait implemented by transcription engines
///
/// The HTTP layer depends on this seam rather than a concrete model, which
/// keeps request handling testable without loading model weights.
#[async_trait]
pub trait Engine: Send + Sync {
    /// Run inference over the audio file at `path`
    async fn transcribe(&self, path: &Path, options: TranscribeOptions) -> crate::error::Result<Transcription>;

    /// Get the engine name
    fn name(&self) -> &str;
}
