//! Recording stub engine for integration tests
//!
//! Returns canned segments and records every call so tests can assert on
//! the requested task mode, language hint, and temp-file lifecycle.

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use transcribe::{Engine, Segment, Task, TranscribeError, TranscribeOptions, Transcription};

/// One observed engine invocation
#[derive(Debug, Clone)]
pub struct RecordedCall {
    /// Temp-file path handed to the engine
    pub path: PathBuf,
    /// Whether the temp file existed at call time
    pub file_existed: bool,
    pub language: Option<String>,
    pub task: Task,
}

/// Stub engine returning a fixed two-segment result
pub struct MockEngine {
    calls: Mutex<Vec<RecordedCall>>,
    fail: bool,
}

impl MockEngine {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: false,
        })
    }

    /// Stub engine that fails every inference
    pub fn failing() -> Arc<Self> {
        Arc::new(Self {
            calls: Mutex::new(Vec::new()),
            fail: true,
        })
    }

    /// All calls observed so far
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of inference calls observed
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl Engine for MockEngine {
    async fn transcribe(&self, path: &Path, options: TranscribeOptions) -> Result<Transcription, TranscribeError> {
        self.calls.lock().unwrap().push(RecordedCall {
            path: path.to_path_buf(),
            file_existed: path.exists(),
            language: options.language.clone(),
            task: options.task,
        });

        if self.fail {
            return Err(TranscribeError::Engine("stub inference failure".to_string()));
        }

        Ok(Transcription {
            segments: vec![
                Segment {
                    start: 0.0,
                    end: 1.0,
                    text: " Hello".to_string(),
                },
                Segment {
                    start: 1.0,
                    end: 2.0,
                    text: " world.".to_string(),
                },
            ],
            language: options.language.unwrap_or_else(|| "en".to_string()),
            duration: 2.0,
        })
    }

    fn name(&self) -> &str {
        "mock"
    }
}
