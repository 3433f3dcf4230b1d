//! HTTP adapter for the completion provider port.
//!
//! Talks to any OpenAI-compatible `/chat/completions` endpoint. The default
//! target is the local g4f API server, which aggregates free-tier providers
//! behind that interface.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

#[cfg(test)]
use axum as _;
#[cfg(test)]
use tokio as _;

pub mod client;
pub mod wire;

pub use client::{DEFAULT_UPSTREAM_BASE_URL, OpenAiCompatProvider, UpstreamConfig};
