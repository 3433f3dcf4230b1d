//! Completion provider port.
//!
//! Upstream aggregators answer either with bare text or with an
//! OpenAI-style `choices[].message.content` object. [`CompletionReply`]
//! models both shapes and [`CompletionReply::into_text`] is the single place
//! where they are normalised.

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::ChatMessage;

/// Errors raised by a completion provider.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CompletionError {
    /// The provider could not be reached.
    #[error("Failed to reach completion provider: {0}")]
    Transport(String),

    /// The provider answered with a non-success status.
    #[error("Completion provider returned status {status}: {body}")]
    UpstreamStatus { status: u16, body: String },

    /// The provider answered but the body could not be read.
    #[error("Failed to decode completion reply: {0}")]
    Decode(String),

    /// The reply text carries one of the provider's known failure markers.
    #[error("Invalid response from the model.")]
    Disqualified,
}

/// `message` object inside a structured choice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyMessage {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
}

/// One entry of `choices`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplyChoice {
    #[serde(default)]
    pub message: Option<ReplyMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_reason: Option<String>,
}

/// Structured reply; every level may be absent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    #[serde(default)]
    pub choices: Vec<ReplyChoice>,
}

/// A completion as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompletionReply {
    PlainText(String),
    Structured(StructuredReply),
}

impl CompletionReply {
    /// Extract the reply text.
    ///
    /// Structured replies yield `choices[0].message.content`, or an empty
    /// string when any level is missing.
    #[must_use]
    pub fn into_text(self) -> String {
        match self {
            Self::PlainText(text) => text,
            Self::Structured(reply) => reply
                .choices
                .into_iter()
                .next()
                .and_then(|choice| choice.message)
                .and_then(|message| message.content)
                .unwrap_or_default(),
        }
    }
}

impl From<String> for CompletionReply {
    fn from(text: String) -> Self {
        Self::PlainText(text)
    }
}

impl From<&str> for CompletionReply {
    fn from(text: &str) -> Self {
        Self::PlainText(text.to_string())
    }
}

/// Port for the upstream chat-completion service.
#[async_trait]
pub trait CompletionProvider: Send + Sync + fmt::Debug {
    /// Request a single completion for `messages` from `model`.
    ///
    /// # Errors
    ///
    /// Returns `CompletionError` if the provider fails; callers decide
    /// whether to retry.
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<CompletionReply, CompletionError>;
}
