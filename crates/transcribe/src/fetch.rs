use crate::error::{Result, TranscribeError};
use crate::http_client::http_client;

/// Download a remote audio resource
///
/// Any fetch problem, including a non-success status from the remote host,
/// surfaces to the caller as a 400.
pub(crate) async fn fetch_audio(url: &str) -> Result<Vec<u8>> {
    let response = http_client().get(url).send().await.map_err(|e| {
        tracing::warn!(url, error = %e, "audio fetch failed");
        TranscribeError::FetchFailed(e.to_string())
    })?;

    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, %status, "audio fetch returned non-success status");
        return Err(TranscribeError::FetchFailed(format!("status {status}")));
    }

    let body = response.bytes().await.map_err(|e| {
        tracing::warn!(url, error = %e, "audio fetch body read failed");
        TranscribeError::FetchFailed(e.to_string())
    })?;

    Ok(body.to_vec())
}
