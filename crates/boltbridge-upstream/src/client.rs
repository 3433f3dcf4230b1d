//! reqwest-backed [`CompletionProvider`].

use async_trait::async_trait;
use boltbridge_core::{ChatMessage, CompletionError, CompletionProvider, CompletionReply};
use reqwest::Client;
use tracing::{debug, error};

use crate::wire::{ChatCompletionRequest, decode_reply};

/// Local g4f API server.
pub const DEFAULT_UPSTREAM_BASE_URL: &str = "http://127.0.0.1:1337/v1";

/// Where and how to reach the upstream service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    /// Base URL up to and including the API version segment.
    pub base_url: String,
    /// Optional bearer token sent as `Authorization`.
    pub api_key: Option<String>,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_UPSTREAM_BASE_URL.to_string(),
            api_key: None,
        }
    }
}

impl UpstreamConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
        }
    }

    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Full URL of the chat completions endpoint.
    #[must_use]
    pub fn completions_url(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

/// Completion provider speaking the OpenAI chat completions protocol.
///
/// No request timeout is set; the retry loop's attempt budget is the only
/// bound on a slow upstream.
#[derive(Debug, Clone)]
pub struct OpenAiCompatProvider {
    client: Client,
    url: String,
    api_key: Option<String>,
}

impl OpenAiCompatProvider {
    /// Build a provider with its own connection pool.
    pub fn new(config: &UpstreamConfig) -> reqwest::Result<Self> {
        let client = Client::builder().pool_max_idle_per_host(10).build()?;
        Ok(Self::with_client(client, config))
    }

    /// Build a provider on an existing client.
    pub fn with_client(client: Client, config: &UpstreamConfig) -> Self {
        Self {
            client,
            url: config.completions_url(),
            api_key: config.api_key.clone(),
        }
    }

    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CompletionProvider for OpenAiCompatProvider {
    async fn complete(
        &self,
        model: &str,
        messages: &[ChatMessage],
    ) -> Result<CompletionReply, CompletionError> {
        debug!(url = %self.url, model, "Forwarding chat completion");

        let mut request = self
            .client
            .post(&self.url)
            .json(&ChatCompletionRequest::new(model, messages));
        if let Some(ref token) = self.api_key {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            error!("Failed to reach completion provider: {e}");
            CompletionError::Transport(e.to_string())
        })?;

        let status = response.status();
        let body = response
            .bytes()
            .await
            .map_err(|e| CompletionError::Decode(e.to_string()))?;

        if !status.is_success() {
            return Err(CompletionError::UpstreamStatus {
                status: status.as_u16(),
                body: String::from_utf8_lossy(&body).into_owned(),
            });
        }

        decode_reply(&body)
    }
}
