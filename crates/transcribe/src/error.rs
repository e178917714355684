use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, TranscribeError>;

/// Transcription service errors with appropriate HTTP status codes
#[derive(Debug, Error)]
pub enum TranscribeError {
    /// Malformed or incomplete request (missing upload, missing URL)
    #[error("{0}")]
    InvalidRequest(String),

    /// Audio payload the decoder cannot parse
    #[error("unsupported or corrupt audio: {0}")]
    InvalidAudio(String),

    /// Outbound fetch of a remote audio resource failed
    #[error("Failed to download audio file")]
    FetchFailed(String),

    /// Model loading or inference failure
    ///
    /// The inner message is logged but never exposed to API consumers.
    #[error("transcription engine error: {0}")]
    Engine(String),

    /// Temp-file or other local I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl TranscribeError {
    /// Get the appropriate HTTP status code for this error
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidRequest(_) | Self::InvalidAudio(_) | Self::FetchFailed(_) => StatusCode::BAD_REQUEST,
            Self::Engine(_) | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message that is safe to expose to API consumers
    pub fn detail(&self) -> String {
        match self {
            Self::Engine(_) | Self::Io(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        }
    }
}

/// Error body shape shared with the original service: `{"detail": "..."}`
#[derive(Debug, Serialize)]
struct ErrorBody {
    detail: String,
}

impl IntoResponse for TranscribeError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        (status, Json(ErrorBody { detail: self.detail() })).into_response()
    }
}
