//! Axum adapter for boltbridge.
//!
//! Exposes the Bolt chat API under `/api`:
//!
//! - `POST /api/chat` runs the code-response retry loop for `{ "input": ... }`
//! - `GET /api/chat/models` lists the advertised models
//! - `GET /api/chat/api/tags` lists the advertised tags
//!
//! Every route sits behind the `X-API-Key` guard and a single-origin CORS
//! policy.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Silence unused dev-dependency warnings for the unit test build
#[cfg(test)]
use async_trait as _;
#[cfg(test)]
use http_body_util as _;
#[cfg(test)]
use reqwest as _;
#[cfg(test)]
use tower as _;

pub mod auth;
pub mod bootstrap;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

// Re-export primary types
pub use auth::{API_KEY_HEADER, ApiKey};
pub use bootstrap::{
    AxumContext, BOLT_ORIGIN, CorsConfig, DEFAULT_PORT, ServerConfig, bootstrap,
    bootstrap_with_provider, start_server,
};
pub use error::HttpError;
pub use routes::create_router;
pub use state::AppState;
