//! Command-line front for the boltbridge gateway.
//!
//! Settings come from flags, the environment, or a `.env` file in that order
//! of precedence.

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

// Used by main.rs binary
use anyhow as _;
use dotenvy as _;
use tokio as _;
use tracing as _;
use tracing_subscriber as _;

pub mod error;
pub mod parser;

pub use error::CliError;
pub use parser::Cli;
