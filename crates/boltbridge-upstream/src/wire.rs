//! Request body and reply decoding for the OpenAI chat wire format.

use boltbridge_core::{ChatMessage, CompletionError, CompletionReply, StructuredReply};
use serde::Serialize;
use serde_json::Value;

/// Body posted to `/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest<'a> {
    pub model: &'a str,
    pub messages: &'a [ChatMessage],
    pub stream: bool,
}

impl<'a> ChatCompletionRequest<'a> {
    /// Non-streaming request for `model`.
    pub const fn new(model: &'a str, messages: &'a [ChatMessage]) -> Self {
        Self {
            model,
            messages,
            stream: false,
        }
    }
}

/// Decode a successful response body.
///
/// - JSON object: structured reply
/// - JSON string: plain text
/// - not JSON at all: the raw body as plain text
/// - any other JSON value: decode error
pub fn decode_reply(body: &[u8]) -> Result<CompletionReply, CompletionError> {
    let value = match serde_json::from_slice::<Value>(body) {
        Ok(value) => value,
        Err(_) => {
            return Ok(CompletionReply::PlainText(
                String::from_utf8_lossy(body).into_owned(),
            ));
        }
    };

    match value {
        Value::String(text) => Ok(CompletionReply::PlainText(text)),
        Value::Object(_) => serde_json::from_value::<StructuredReply>(value)
            .map(CompletionReply::Structured)
            .map_err(|e| CompletionError::Decode(e.to_string())),
        other => Err(CompletionError::Decode(format!(
            "unexpected reply shape: {other}"
        ))),
    }
}
