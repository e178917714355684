use serde::{Deserialize, Serialize};

/// Query parameters shared by both transcription endpoints
#[derive(Debug, Default, Deserialize)]
pub struct TranscribeParams {
    /// Language spoken in the audio (e.g. "en", "th"); auto-detect if absent
    pub language: Option<String>,
    /// Whether to translate output to English
    #[serde(default)]
    pub translate: bool,
}

/// JSON body for the URL endpoint
///
/// `url` stays optional at the deserialization layer so a body without it
/// maps to a 400 with a detail message rather than a generic rejection.
#[derive(Debug, Deserialize)]
pub struct UrlPayload {
    pub url: Option<String>,
}

/// Response returned by both transcription endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TranscriptionResponse {
    /// Concatenated transcript text
    pub transcript: String,
    /// Detected (or caller-provided) language code
    pub language: String,
    /// Audio duration in seconds
    pub duration: f64,
    /// Echo of the fetched URL; only present for the URL endpoint
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
}
