//! Axum server bootstrap - the composition root.
//!
//! This module is the only place where the completion provider, the retry
//! loop and the credential are wired together for the web adapter.

use std::sync::Arc;

use anyhow::{Context, Result};
use boltbridge_core::{
    CodeResponseLoop, CompletionProvider, CompletionRetriever, DEFAULT_MODEL, RetryPolicy,
};
use boltbridge_upstream::{OpenAiCompatProvider, UpstreamConfig};
use tokio::net::TcpListener;
use tracing::info;

use crate::auth::ApiKey;

/// Default HTTP port.
pub const DEFAULT_PORT: u16 = 5000;

/// Origin of the hosted Bolt front-end.
pub const BOLT_ORIGIN: &str = "https://627b0e63.bolt-diy-eiq.pages.dev";

/// CORS configuration for the `/api` routes: exactly one allowed origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsConfig {
    pub allowed_origin: String,
}

impl CorsConfig {
    pub fn new(allowed_origin: impl Into<String>) -> Self {
        Self {
            allowed_origin: allowed_origin.into(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self::new(BOLT_ORIGIN)
    }
}

/// Server configuration for the Axum adapter.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind.
    pub host: String,
    /// Port for the HTTP server.
    pub port: u16,
    /// Shared secret expected in `X-API-Key`.
    pub api_key: ApiKey,
    /// CORS configuration.
    pub cors: CorsConfig,
    /// Model identifier requested from the upstream.
    pub model: String,
    /// Upstream completion endpoint.
    pub upstream: UpstreamConfig,
    /// Attempt budget for the code-response loop.
    pub retry: RetryPolicy,
}

impl ServerConfig {
    /// Create config with default values around the given secret.
    pub fn with_defaults(api_key: ApiKey) -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            api_key,
            cors: CorsConfig::default(),
            model: DEFAULT_MODEL.to_string(),
            upstream: UpstreamConfig::default(),
            retry: RetryPolicy::default(),
        }
    }

    #[must_use]
    pub const fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    /// Replace the allowed CORS origin.
    #[must_use]
    pub fn with_allowed_origin(mut self, origin: impl Into<String>) -> Self {
        self.cors = CorsConfig::new(origin);
        self
    }

    #[must_use]
    pub fn with_upstream(mut self, upstream: UpstreamConfig) -> Self {
        self.upstream = upstream;
        self
    }

    #[must_use]
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    #[must_use]
    pub const fn with_retry(mut self, retry: RetryPolicy) -> Self {
        self.retry = retry;
        self
    }

    /// Address the listener binds to, as `host:port`.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Application context for the Axum adapter.
#[derive(Debug)]
pub struct AxumContext {
    /// Retry loop around the completion provider.
    pub chat: CodeResponseLoop,
    /// Secret checked by the auth middleware.
    pub api_key: ApiKey,
}

/// Bootstrap the context with the HTTP upstream from `config`.
pub fn bootstrap(config: &ServerConfig) -> Result<AxumContext> {
    let provider = OpenAiCompatProvider::new(&config.upstream)
        .context("Failed to build upstream HTTP client")?;

    info!(
        upstream = %provider.url(),
        model = %config.model,
        max_attempts = config.retry.max_attempts,
        delay_secs = config.retry.delay.as_secs(),
        "Axum bootstrap resolved upstream"
    );

    Ok(bootstrap_with_provider(config, Arc::new(provider)))
}

/// Bootstrap the context around an arbitrary provider.
pub fn bootstrap_with_provider(
    config: &ServerConfig,
    provider: Arc<dyn CompletionProvider>,
) -> AxumContext {
    let retriever = CompletionRetriever::new(provider, config.model.clone());

    AxumContext {
        chat: CodeResponseLoop::new(retriever, config.retry),
        api_key: config.api_key.clone(),
    }
}

/// Start the web server and serve until the process exits.
pub async fn start_server(config: ServerConfig) -> Result<()> {
    let ctx = bootstrap(&config)?;
    let app = crate::routes::create_router(ctx, &config.cors);

    let addr = config.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {addr}"))?;

    info!("boltbridge listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app).await?;
    Ok(())
}
