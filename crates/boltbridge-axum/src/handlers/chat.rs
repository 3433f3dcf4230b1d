//! `POST /api/chat`.

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use boltbridge_core::{ChatEnvelope, RetryOutcome, format_response};
use tracing::{info, warn};

use crate::dto::ChatRequest;
use crate::error::HttpError;
use crate::state::AppState;

/// Run the code-response loop for the request's input.
///
/// 200 with the accepted code, 400 for a bad body, 500 once the attempt
/// budget is spent.
pub async fn chat(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<ChatEnvelope>, HttpError> {
    let request = ChatRequest::from_body(&body)?;

    info!(input_len = request.input.len(), "Processing chat request");

    match state.chat.run(&request.input).await {
        RetryOutcome::Accepted { content, attempts } => {
            info!(attempts, "Chat request completed");
            Ok(Json(format_response(content, None)))
        }
        RetryOutcome::Exhausted { reason, attempts } => {
            warn!(attempts, reason = %reason.message(), "Chat request exhausted retries");
            Err(reason.into())
        }
    }
}
