//! Shared-secret guard for the `/api` routes.
//!
//! Requests must carry `X-API-Key` equal to the configured secret. Anything
//! else is answered with a 401 error envelope before the handler runs.

use std::fmt;
use std::sync::Arc;

use axum::extract::{Request, State};
use axum::http::HeaderName;
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};

use crate::error::HttpError;
use crate::state::AppState;

/// Header carrying the shared secret.
pub const API_KEY_HEADER: HeaderName = HeaderName::from_static("x-api-key");

/// The process-wide API secret.
///
/// Compared by exact, case-sensitive equality. `Debug` never prints it.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(Arc<str>);

impl ApiKey {
    /// Returns `None` for an empty secret.
    pub fn new(secret: impl AsRef<str>) -> Option<Self> {
        let secret = secret.as_ref();
        if secret.is_empty() {
            None
        } else {
            Some(Self(Arc::from(secret)))
        }
    }

    #[must_use]
    pub fn matches(&self, candidate: &str) -> bool {
        candidate == self.0.as_ref()
    }
}

impl fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ApiKey(<redacted>)")
    }
}

/// Auth middleware: validate `X-API-Key`.
pub async fn require_api_key(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let presented = req
        .headers()
        .get(&API_KEY_HEADER)
        .and_then(|v| v.to_str().ok());

    match presented {
        Some(key) if state.api_key.matches(key) => next.run(req).await,
        _ => {
            tracing::warn!(
                path = %req.uri().path(),
                key_present = presented.is_some(),
                "Unauthorized API request - missing or invalid API key"
            );
            HttpError::Unauthorized.into_response()
        }
    }
}
