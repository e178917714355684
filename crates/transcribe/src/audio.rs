//! WAV decoding and conditioning for the inference engine
//!
//! Whisper consumes 16 kHz mono `f32` PCM in `[-1.0, 1.0]`. Uploads arrive
//! as arbitrary WAV files, so multi-channel audio is downmixed and other
//! sample rates are linearly resampled.

use std::path::Path;

use crate::error::{Result, TranscribeError};

/// Sample rate expected by the model
pub(crate) const MODEL_SAMPLE_RATE: u32 = 16_000;

/// Decoded audio ready for inference
#[derive(Debug)]
pub(crate) struct PcmAudio {
    /// 16 kHz mono samples
    pub samples: Vec<f32>,
    /// Duration of the source audio in seconds
    pub duration: f64,
}

/// Decode a WAV file into model-ready PCM
#[allow(clippy::cast_precision_loss)]
pub(crate) fn load_wav(path: &Path) -> Result<PcmAudio> {
    let mut reader = hound::WavReader::open(path).map_err(|e| TranscribeError::InvalidAudio(e.to_string()))?;
    let spec = reader.spec();

    let interleaved: Vec<f32> = match (spec.sample_format, spec.bits_per_sample) {
        (hound::SampleFormat::Float, 32) => reader
            .samples::<f32>()
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| TranscribeError::InvalidAudio(e.to_string()))?,
        (hound::SampleFormat::Int, 16) => reader
            .samples::<i16>()
            .map(|s| s.map(|v| f32::from(v) / 32768.0))
            .collect::<std::result::Result<_, _>>()
            .map_err(|e| TranscribeError::InvalidAudio(e.to_string()))?,
        (hound::SampleFormat::Int, 24 | 32) => {
            let scale = f64::from(1_u32 << (spec.bits_per_sample - 1));
            reader
                .samples::<i32>()
                .map(|s| {
                    s.map(|v| {
                        #[allow(clippy::cast_possible_truncation)]
                        let sample = (f64::from(v) / scale) as f32;
                        sample
                    })
                })
                .collect::<std::result::Result<_, _>>()
                .map_err(|e| TranscribeError::InvalidAudio(e.to_string()))?
        }
        (format, bits) => {
            return Err(TranscribeError::InvalidAudio(format!(
                "unsupported sample format: {bits}-bit {format:?}"
            )));
        }
    };

    let channels = usize::from(spec.channels.max(1));
    let frames = interleaved.len() / channels;
    let duration = frames as f64 / f64::from(spec.sample_rate);

    let mono = downmix(&interleaved, channels);
    let samples = resample(&mono, spec.sample_rate, MODEL_SAMPLE_RATE);

    Ok(PcmAudio { samples, duration })
}

/// Average interleaved channels into mono
#[allow(clippy::cast_precision_loss)]
fn downmix(interleaved: &[f32], channels: usize) -> Vec<f32> {
    if channels == 1 {
        return interleaved.to_vec();
    }

    interleaved
        .chunks_exact(channels)
        .map(|frame| frame.iter().sum::<f32>() / channels as f32)
        .collect()
}

/// Linear resampling between sample rates
#[allow(clippy::cast_precision_loss, clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn resample(samples: &[f32], from_rate: u32, to_rate: u32) -> Vec<f32> {
    if from_rate == to_rate || samples.is_empty() {
        return samples.to_vec();
    }

    let ratio = f64::from(from_rate) / f64::from(to_rate);
    let out_len = ((samples.len() as f64) / ratio).floor() as usize;

    (0..out_len)
        .map(|i| {
            let pos = i as f64 * ratio;
            let left = pos.floor() as usize;
            let right = (left + 1).min(samples.len() - 1);
            let frac = (pos - pos.floor()) as f32;
            samples[left].mul_add(1.0 - frac, samples[right] * frac)
        })
        .collect()
}
