//! Axum-specific error types.
//!
//! Every error leaves the server as a Bolt error envelope; clients never see
//! a framework error page or a stack trace.

use std::any::Any;

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use boltbridge_core::{EnvelopeStatus, ExhaustionReason, format_response};
use thiserror::Error;

/// Axum-specific error type.
#[derive(Debug, Error)]
pub enum HttpError {
    /// Missing or invalid credential.
    #[error("Invalid or missing API key")]
    Unauthorized,

    /// Bad request (invalid input).
    #[error("{0}")]
    BadRequest(String),

    /// The retry loop ran out of attempts.
    #[error("{0}")]
    Upstream(String),

    /// Known path, unsupported method.
    #[error("Method not allowed")]
    MethodNotAllowed,

    /// Internal server error.
    #[error("An unexpected error occurred: {0}")]
    Internal(String),
}

impl HttpError {
    #[must_use]
    pub const fn status(&self) -> StatusCode {
        match self {
            Self::Unauthorized => StatusCode::UNAUTHORIZED,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::Upstream(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let envelope = format_response(self.to_string(), Some(EnvelopeStatus::Error));
        (status, Json(envelope)).into_response()
    }
}

impl From<ExhaustionReason> for HttpError {
    fn from(reason: ExhaustionReason) -> Self {
        Self::Upstream(reason.message())
    }
}

/// Panic boundary for `CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!(%detail, "Handler panicked");
    HttpError::Internal(detail).into_response()
}
