//! Mock remote audio host for URL-fetch tests

use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::{Router, routing};
use tokio_util::sync::CancellationToken;

/// Small HTTP server handing out a canned audio body
pub struct MockAudioHost {
    addr: SocketAddr,
    shutdown: CancellationToken,
    hits: Arc<AtomicU32>,
}

async fn serve_clip(State(hits): State<Arc<AtomicU32>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::OK, b"fake-audio-bytes".to_vec())
}

async fn serve_missing(State(hits): State<Arc<AtomicU32>>) -> impl IntoResponse {
    hits.fetch_add(1, Ordering::SeqCst);
    (StatusCode::NOT_FOUND, "no such clip")
}

impl MockAudioHost {
    /// Start the mock host, returning immediately
    pub async fn start() -> anyhow::Result<Self> {
        let hits = Arc::new(AtomicU32::new(0));

        let app = Router::new()
            .route("/clip.wav", routing::get(serve_clip))
            .route("/missing.wav", routing::get(serve_missing))
            .with_state(Arc::clone(&hits));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let shutdown = CancellationToken::new();
        let shutdown_clone = shutdown.clone();

        tokio::spawn(async move {
            axum::serve(listener, app)
                .with_graceful_shutdown(async move {
                    shutdown_clone.cancelled().await;
                })
                .await
                .ok();
        });

        Ok(Self { addr, shutdown, hits })
    }

    /// URL for the clip that downloads successfully
    pub fn clip_url(&self) -> String {
        format!("http://{}/clip.wav", self.addr)
    }

    /// URL that returns a 404
    pub fn missing_url(&self) -> String {
        format!("http://{}/missing.wav", self.addr)
    }

    /// Number of requests the host has served
    pub fn hits(&self) -> u32 {
        self.hits.load(Ordering::SeqCst)
    }
}

impl Drop for MockAudioHost {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}
