//! Single-shot completion retrieval.

use std::sync::Arc;

use tracing::debug;

use crate::domain::ChatMessage;
use crate::ports::{CompletionError, CompletionProvider};

/// Model requested from the provider unless configured otherwise.
pub const DEFAULT_MODEL: &str = "gpt-4o";

/// Sends one user turn to the provider and returns the reply text.
///
/// Errors from the provider are returned untouched; retrying is the
/// caller's concern.
#[derive(Debug, Clone)]
pub struct CompletionRetriever {
    provider: Arc<dyn CompletionProvider>,
    model: String,
}

impl CompletionRetriever {
    pub fn new(provider: Arc<dyn CompletionProvider>, model: impl Into<String>) -> Self {
        Self {
            provider,
            model: model.into(),
        }
    }

    /// Retriever for [`DEFAULT_MODEL`].
    pub fn with_default_model(provider: Arc<dyn CompletionProvider>) -> Self {
        Self::new(provider, DEFAULT_MODEL)
    }

    #[must_use]
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Request a completion for `input` and extract its text.
    pub async fn retrieve(&self, input: &str) -> Result<String, CompletionError> {
        debug!(model = %self.model, input_len = input.len(), "Requesting completion");
        let messages = [ChatMessage::user(input)];
        let reply = self.provider.complete(&self.model, &messages).await?;
        Ok(reply.into_text())
    }
}
