//! Request DTOs for the chat API.

use serde::Deserialize;
use serde_json::Value;

use crate::error::HttpError;

/// Envelope text for a body that is not a usable JSON object.
pub const INVALID_PAYLOAD_MESSAGE: &str = "Invalid request payload";

/// Envelope text for a missing or empty `input`.
pub const NO_INPUT_MESSAGE: &str = "No input provided";

#[derive(Debug, Deserialize)]
struct RawChatRequest {
    #[serde(default)]
    input: Option<String>,
}

/// Validated body of `POST /api/chat`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatRequest {
    pub input: String,
}

impl ChatRequest {
    /// Parse and validate a raw request body.
    ///
    /// Bodies that are not JSON, not an object, an empty object, or carry a
    /// non-string `input` are invalid payloads. A missing, null or empty
    /// `input` means no input was provided.
    pub fn from_body(body: &[u8]) -> Result<Self, HttpError> {
        let invalid = || HttpError::BadRequest(INVALID_PAYLOAD_MESSAGE.to_string());

        let value: Value = serde_json::from_slice(body).map_err(|_| invalid())?;
        if !value.as_object().is_some_and(|map| !map.is_empty()) {
            return Err(invalid());
        }

        let raw: RawChatRequest = serde_json::from_value(value).map_err(|_| invalid())?;
        match raw.input {
            Some(input) if !input.is_empty() => Ok(Self { input }),
            _ => Err(HttpError::BadRequest(NO_INPUT_MESSAGE.to_string())),
        }
    }
}
