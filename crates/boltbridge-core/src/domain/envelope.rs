//! The Bolt response envelope.
//!
//! Every chat response, successful or not, is shaped as
//! `{ status, data: { messages: [ { role, content } ] } }` with exactly one
//! assistant message.

use serde::{Deserialize, Serialize};

use super::chat::MessageRole;

/// Outcome flag carried at the top of the envelope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    #[default]
    Success,
    Error,
}

/// A message inside the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeMessage {
    pub role: MessageRole,
    pub content: String,
}

/// The `data` member of the envelope.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnvelopeData {
    pub messages: Vec<EnvelopeMessage>,
}

/// Fixed response shape expected by the Bolt chat front-end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEnvelope {
    pub status: EnvelopeStatus,
    pub data: EnvelopeData,
}

impl ChatEnvelope {
    /// Wrap `content` as the single assistant message.
    pub fn new(content: impl Into<String>, status: EnvelopeStatus) -> Self {
        Self {
            status,
            data: EnvelopeData {
                messages: vec![EnvelopeMessage {
                    role: MessageRole::Assistant,
                    content: content.into(),
                }],
            },
        }
    }
}

/// Build an envelope, defaulting the status to `success`.
pub fn format_response(content: impl Into<String>, status: Option<EnvelopeStatus>) -> ChatEnvelope {
    ChatEnvelope::new(content, status.unwrap_or_default())
}
