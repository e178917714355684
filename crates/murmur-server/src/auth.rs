use std::sync::Arc;

use axum::Json;
use axum::extract::Request;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use http::StatusCode;
use secrecy::{ExposeSecret, SecretString};

/// Detail message returned on authentication failure
const UNAUTHORIZED_DETAIL: &str = "Invalid or missing token";

/// Shared-secret bearer auth state
#[derive(Clone)]
pub(crate) struct AuthState {
    expected_header: Arc<str>,
    public_paths: Arc<[String]>,
}

impl AuthState {
    pub fn new(token: &SecretString, public_paths: Vec<String>) -> Self {
        Self {
            expected_header: Arc::from(format!("Bearer {}", token.expose_secret())),
            public_paths: Arc::from(public_paths),
        }
    }
}

/// Authenticate requests against the static bearer token
///
/// The full `Authorization` header value is compared verbatim against
/// `Bearer <token>`. Runs before any body is read, so unauthenticated
/// requests never reach the engine or trigger an outbound fetch.
pub(crate) async fn auth_middleware(state: AuthState, request: Request, next: Next) -> Response {
    let path = request.uri().path();

    if state.public_paths.iter().any(|p| path.starts_with(p.as_str())) {
        return next.run(request).await;
    }

    let header = request
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());

    if header == Some(&state.expected_header) {
        return next.run(request).await;
    }

    tracing::warn!(path, "rejected request with invalid or missing token");

    (
        StatusCode::UNAUTHORIZED,
        Json(serde_json::json!({ "detail": UNAUTHORIZED_DETAIL })),
    )
        .into_response()
}
