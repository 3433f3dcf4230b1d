//! CLI configuration errors.

use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CliError {
    /// The shared secret is unset or empty.
    #[error("API_KEY environment variable is not set!")]
    MissingApiKey,
}
