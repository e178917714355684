#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod auth;
mod health;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::Router;
use murmur_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the transcription engine fails to initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let transcription = transcribe::build_server(config)?;
        Ok(Self::assemble(config, transcription))
    }

    /// Build the server around an injected engine
    ///
    /// Used by tests that substitute a stub for the real model.
    pub fn with_engine(config: &Config, engine: Arc<dyn transcribe::Engine>) -> Self {
        let transcription = Arc::new(transcribe::Server::with_engine(engine));
        Self::assemble(config, transcription)
    }

    fn assemble(config: &Config, transcription: Arc<transcribe::Server>) -> Self {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 8000)));

        let mut app = Router::new();

        // Health check
        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        // Transcription routes
        app = app.merge(transcribe::endpoint_router().with_state(transcription));

        // Upload size ceiling
        app = app.layer(axum::extract::DefaultBodyLimit::max(config.engine.body_limit_bytes));

        // Tracing
        app = app.layer(TraceLayer::new_for_http());

        // Bearer-token authentication (outermost, so nothing below it runs
        // for unauthenticated requests)
        let auth_state = auth::AuthState::new(&config.auth.token, config.auth.public_paths.clone());
        app = app.layer(axum::middleware::from_fn(move |req, next| {
            let state = auth_state.clone();
            async move { auth::auth_middleware(state, req, next).await }
        }));

        Self {
            router: app,
            listen_address,
        }
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}
