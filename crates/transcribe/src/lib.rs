#![allow(
    clippy::must_use_candidate,
    clippy::missing_errors_doc,
    clippy::missing_const_for_fn,
    clippy::module_name_repetitions
)]

mod audio;
mod engine;
mod error;
mod fetch;
mod http_client;
mod request;
mod server;
mod types;

use std::sync::Arc;

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::post,
};

pub use engine::{Engine, Segment, Task, TranscribeOptions, Transcription};
pub use error::{Result, TranscribeError};
pub use server::{Server, ServerBuilder};
pub use types::{TranscribeParams, TranscriptionResponse, UrlPayload};
use request::ExtractUpload;

/// Fixed temp-file suffix for audio fetched from a URL
const FETCHED_AUDIO_SUFFIX: &str = ".audio";

/// Build the transcription server from configuration
///
/// # Errors
///
/// Returns an error if the engine fails to initialize
pub fn build_server(config: &murmur_config::Config) -> anyhow::Result<Arc<Server>> {
    let server = Arc::new(
        ServerBuilder::new(config)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to initialize transcription server: {e}"))?,
    );
    Ok(server)
}

/// Create the endpoint router for transcription
pub fn endpoint_router() -> Router<Arc<Server>> {
    Router::new()
        .route("/transcribe", post(transcribe))
        .route("/transcribe-url", post(transcribe_url))
}

/// Handle uploaded-file transcription requests
async fn transcribe(
    State(server): State<Arc<Server>>,
    Query(params): Query<TranscribeParams>,
    ExtractUpload(upload): ExtractUpload,
) -> Result<Json<TranscriptionResponse>> {
    tracing::debug!(filename = %upload.filename, "transcription upload handler called");

    let suffix = request::suffix_for(&upload.filename);
    let result = server
        .transcribe_bytes(&upload.data, &suffix, options_from(&params))
        .await?;

    tracing::debug!("transcription complete");

    Ok(Json(response_from(result, None)))
}

/// Handle transcription requests for a remote audio URL
async fn transcribe_url(
    State(server): State<Arc<Server>>,
    Query(params): Query<TranscribeParams>,
    Json(payload): Json<UrlPayload>,
) -> Result<Json<TranscriptionResponse>> {
    let url = payload
        .url
        .ok_or_else(|| TranscribeError::InvalidRequest("Missing 'url' in request body".to_string()))?;

    tracing::debug!(%url, "transcription URL handler called");

    let audio = fetch::fetch_audio(&url).await?;
    let result = server
        .transcribe_bytes(&audio, FETCHED_AUDIO_SUFFIX, options_from(&params))
        .await?;

    tracing::debug!("transcription complete");

    Ok(Json(response_from(result, Some(url))))
}

fn options_from(params: &TranscribeParams) -> TranscribeOptions {
    TranscribeOptions {
        language: params.language.clone(),
        task: if params.translate { Task::Translate } else { Task::Transcribe },
    }
}

fn response_from(result: Transcription, source_url: Option<String>) -> TranscriptionResponse {
    TranscriptionResponse {
        transcript: result.transcript(),
        language: result.language,
        duration: result.duration,
        source_url,
    }
}
