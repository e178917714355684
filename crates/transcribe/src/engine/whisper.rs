use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use murmur_config::EngineConfig;
use tokio::sync::Semaphore;
use whisper_rs::{FullParams, SamplingStrategy, WhisperContext, WhisperContextParameters};

use crate::audio;
use crate::error::{Result, TranscribeError};

use super::{Engine, Segment, TranscribeOptions, Task, Transcription};

/// Local Whisper engine backed by `whisper.cpp`
///
/// One model context is loaded at startup and shared across requests; each
/// inference gets its own decode state. The semaphore bounds how many
/// inferences run at once so concurrent requests queue instead of piling
/// onto the blocking pool.
pub(crate) struct WhisperEngine {
    ctx: Arc<WhisperContext>,
    permits: Semaphore,
    beam_size: i32,
    threads: i32,
}

impl WhisperEngine {
    pub fn new(config: &EngineConfig) -> Result<Self> {
        let model_path = config
            .model_path
            .to_str()
            .ok_or_else(|| TranscribeError::Engine("model path is not valid UTF-8".to_string()))?;

        tracing::info!(model_path, "loading whisper model");

        let ctx = WhisperContext::new_with_params(model_path, WhisperContextParameters::default())
            .map_err(|e| TranscribeError::Engine(format!("failed to load model {model_path}: {e}")))?;

        let beam_size = i32::try_from(config.beam_size)
            .map_err(|_| TranscribeError::Engine("beam size out of range".to_string()))?;
        let threads =
            i32::try_from(config.threads).map_err(|_| TranscribeError::Engine("thread count out of range".to_string()))?;

        Ok(Self {
            ctx: Arc::new(ctx),
            permits: Semaphore::new(config.max_concurrency),
            beam_size,
            threads,
        })
    }
}

#[async_trait]
impl Engine for WhisperEngine {
    async fn transcribe(&self, path: &Path, options: TranscribeOptions) -> Result<Transcription> {
        let _permit = self
            .permits
            .acquire()
            .await
            .map_err(|_| TranscribeError::Engine("engine is shutting down".to_string()))?;

        let ctx = Arc::clone(&self.ctx);
        let beam_size = self.beam_size;
        let threads = self.threads;
        let path = path.to_path_buf();

        // Decode and inference are both CPU-bound and can run for the
        // length of the clip; keep them off the async dispatch threads.
        tokio::task::spawn_blocking(move || -> Result<Transcription> {
            let pcm = audio::load_wav(&path)?;
            let (segments, language) = run_inference(&ctx, &pcm.samples, beam_size, threads, &options)?;

            Ok(Transcription {
                segments,
                language,
                duration: pcm.duration,
            })
        })
        .await
        .map_err(|e| TranscribeError::Engine(format!("inference task failed: {e}")))?
    }

    fn name(&self) -> &str {
        "whisper"
    }
}

fn run_inference(
    ctx: &WhisperContext,
    samples: &[f32],
    beam_size: i32,
    threads: i32,
    options: &TranscribeOptions,
) -> Result<(Vec<Segment>, String)> {
    let mut state = ctx
        .create_state()
        .map_err(|e| TranscribeError::Engine(format!("failed to create decode state: {e}")))?;

    let mut params = FullParams::new(SamplingStrategy::BeamSearch {
        beam_size,
        patience: -1.0,
    });
    params.set_n_threads(threads);
    params.set_translate(options.task == Task::Translate);
    params.set_language(options.language.as_deref());
    params.set_print_special(false);
    params.set_print_progress(false);
    params.set_print_realtime(false);
    params.set_print_timestamps(false);

    state
        .full(params, samples)
        .map_err(|e| TranscribeError::Engine(format!("inference failed: {e}")))?;

    let mut segments = Vec::new();
    for i in 0..state.full_n_segments() {
        let Some(segment) = state.get_segment(i) else {
            continue;
        };
        let text = segment
            .to_str_lossy()
            .map_err(|e| TranscribeError::Engine(format!("failed to read segment text: {e}")))?
            .into_owned();

        // Timestamps are reported in centiseconds
        #[allow(clippy::cast_precision_loss)]
        segments.push(Segment {
            start: segment.start_timestamp() as f64 / 100.0,
            end: segment.end_timestamp() as f64 / 100.0,
            text,
        });
    }

    let language = detected_language(&state, options);

    Ok((segments, language))
}

/// Language reported back to the caller
///
/// Prefers the model's detection; falls back to the caller's hint when the
/// id cannot be resolved.
fn detected_language(state: &whisper_rs::WhisperState, options: &TranscribeOptions) -> String {
    whisper_rs::get_lang_str(state.full_lang_id_from_state()).map_or_else(
            || options.language.clone().unwrap_or_else(|| "auto".to_string()),
            ToString::to_string,
        )
}
