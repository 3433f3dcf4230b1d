//! Main CLI parser.

use boltbridge_axum::{ApiKey, BOLT_ORIGIN, ServerConfig};
use boltbridge_core::DEFAULT_MODEL;
use boltbridge_upstream::{DEFAULT_UPSTREAM_BASE_URL, UpstreamConfig};
use clap::Parser;

use crate::error::CliError;

/// HTTP gateway that turns a free-tier LLM aggregator into a Bolt chat backend.
#[derive(Debug, Parser)]
#[command(name = "boltbridge")]
#[command(about = "Bolt-compatible chat gateway with code-response retries")]
#[command(version)]
pub struct Cli {
    /// Shared secret clients must send in X-API-Key
    #[arg(long, env = "API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = boltbridge_axum::DEFAULT_PORT)]
    pub port: u16,

    /// Only origin allowed to call /api from a browser
    #[arg(long, env = "CORS_ORIGIN", default_value = BOLT_ORIGIN)]
    pub cors_origin: String,

    /// Base URL of the OpenAI-compatible upstream (e.g. the g4f API server)
    #[arg(long, env = "UPSTREAM_BASE_URL", default_value = DEFAULT_UPSTREAM_BASE_URL)]
    pub upstream_url: String,

    /// Bearer token for the upstream, if it needs one
    #[arg(long, env = "UPSTREAM_API_KEY", hide_env_values = true)]
    pub upstream_api_key: Option<String>,

    /// Model identifier requested from the upstream
    #[arg(long, env = "MODEL", default_value = DEFAULT_MODEL)]
    pub model: String,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the parsed flags into a server configuration.
    pub fn server_config(&self) -> Result<ServerConfig, CliError> {
        let api_key = self
            .api_key
            .as_deref()
            .and_then(ApiKey::new)
            .ok_or(CliError::MissingApiKey)?;

        let mut upstream = UpstreamConfig::new(self.upstream_url.clone());
        if let Some(token) = self.upstream_api_key.as_deref().filter(|t| !t.is_empty()) {
            upstream = upstream.with_api_key(token);
        }

        let mut config = ServerConfig::with_defaults(api_key)
            .with_port(self.port)
            .with_allowed_origin(self.cors_origin.clone())
            .with_upstream(upstream)
            .with_model(self.model.clone());
        config.host.clone_from(&self.host);

        Ok(config)
    }
}
