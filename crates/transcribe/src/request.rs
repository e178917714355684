use axum::body::Body;
use axum::extract::{FromRequest, Multipart};

use crate::error::TranscribeError;

/// Audio payload pulled out of a multipart upload
#[derive(Debug)]
pub struct AudioUpload {
    /// Raw audio bytes from the `file` field
    pub data: Vec<u8>,
    /// Client-supplied filename; drives the temp-file suffix
    pub filename: String,
}

/// Extractor for the multipart form carrying the audio file
///
/// Unknown form fields are skipped. A request without a `file` field (or
/// with an empty one) is rejected with a 400.
pub struct ExtractUpload(pub AudioUpload);

impl<S> FromRequest<S> for ExtractUpload
where
    S: Send + Sync,
{
    type Rejection = TranscribeError;

    async fn from_request(request: http::Request<Body>, state: &S) -> Result<Self, Self::Rejection> {
        let mut multipart = Multipart::from_request(request, state)
            .await
            .map_err(|e| TranscribeError::InvalidRequest(format!("expected multipart/form-data: {e}")))?;

        let mut upload: Option<AudioUpload> = None;

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| TranscribeError::InvalidRequest(format!("failed to parse multipart form: {e}")))?
        {
            if field.name() != Some("file") {
                continue;
            }

            let filename = field.file_name().unwrap_or("audio.wav").to_string();
            let data = field
                .bytes()
                .await
                .map_err(|e| TranscribeError::InvalidRequest(format!("failed to read audio data: {e}")))?
                .to_vec();

            upload = Some(AudioUpload { data, filename });
        }

        let upload =
            upload.ok_or_else(|| TranscribeError::InvalidRequest("Missing 'file' field in form data".to_string()))?;

        if upload.data.is_empty() {
            return Err(TranscribeError::InvalidRequest("empty audio payload".to_string()));
        }

        Ok(Self(upload))
    }
}

/// Temp-file suffix derived from the uploaded filename's extension
pub(crate) fn suffix_for(filename: &str) -> String {
    std::path::Path::new(filename)
        .extension()
        .map_or_else(String::new, |ext| format!(".{}", ext.to_string_lossy()))
}
