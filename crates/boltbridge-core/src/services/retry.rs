//! Bounded retry loop that waits for a code-like completion.
//!
//! Each request runs its own loop: up to `max_attempts` sequential calls to
//! the retriever with a fixed `delay` between them. A reply is accepted as
//! soon as it passes [`is_code`]; provider failures and replies carrying a
//! known failure marker are retried the same way. There is no wait after
//! the final attempt.

use std::time::Duration;

use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::retriever::CompletionRetriever;
use crate::domain::is_code;
use crate::ports::CompletionError;

/// Substrings the provider embeds in otherwise successful replies when the
/// request actually failed.
pub const DISQUALIFYING_MARKERS: &[&str] = &["Model not found", "too long input"];

/// Envelope text when every attempt produced prose instead of code.
pub const NO_CODE_MESSAGE: &str = "Failed to generate a code response after multiple attempts.";

/// Attempt budget and fixed inter-attempt delay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub delay: Duration,
}

impl RetryPolicy {
    pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;
    pub const DEFAULT_DELAY: Duration = Duration::from_secs(3);

    #[must_use]
    pub const fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts,
            delay,
        }
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::new(Self::DEFAULT_MAX_ATTEMPTS, Self::DEFAULT_DELAY)
    }
}

/// Why the loop gave up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExhaustionReason {
    /// The last attempt failed at the provider (or was disqualified).
    Upstream(CompletionError),
    /// The last attempt succeeded but did not look like code.
    NoCodeResponse,
}

impl ExhaustionReason {
    /// Text placed in the error envelope.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Upstream(err) => format!("Error: {err}"),
            Self::NoCodeResponse => NO_CODE_MESSAGE.to_string(),
        }
    }
}

/// Terminal state of the loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RetryOutcome {
    Accepted { content: String, attempts: u32 },
    Exhausted { reason: ExhaustionReason, attempts: u32 },
}

impl RetryOutcome {
    #[must_use]
    pub const fn attempts(&self) -> u32 {
        match self {
            Self::Accepted { attempts, .. } | Self::Exhausted { attempts, .. } => *attempts,
        }
    }

    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted { .. })
    }
}

/// Drives a [`CompletionRetriever`] until it yields code or the budget runs out.
#[derive(Debug, Clone)]
pub struct CodeResponseLoop {
    retriever: CompletionRetriever,
    policy: RetryPolicy,
}

impl CodeResponseLoop {
    pub const fn new(retriever: CompletionRetriever, policy: RetryPolicy) -> Self {
        Self { retriever, policy }
    }

    #[must_use]
    pub const fn policy(&self) -> RetryPolicy {
        self.policy
    }

    #[must_use]
    pub const fn retriever(&self) -> &CompletionRetriever {
        &self.retriever
    }

    /// Run the loop for one user input.
    pub async fn run(&self, input: &str) -> RetryOutcome {
        // A zero budget still makes one call.
        let max_attempts = self.policy.max_attempts.max(1);
        let mut attempt = 0;

        loop {
            attempt += 1;

            match self.retriever.retrieve(input).await.and_then(screen_reply) {
                Ok(content) if is_code(&content) => {
                    info!(attempt, "Accepted code response");
                    return RetryOutcome::Accepted {
                        content,
                        attempts: attempt,
                    };
                }
                Ok(_) => {
                    debug!(attempt, "Reply has no code signals");
                    if attempt >= max_attempts {
                        warn!(attempts = attempt, "No code response within attempt budget");
                        return RetryOutcome::Exhausted {
                            reason: ExhaustionReason::NoCodeResponse,
                            attempts: attempt,
                        };
                    }
                }
                Err(err) => {
                    warn!(attempt, error = %err, "Completion attempt failed");
                    if attempt >= max_attempts {
                        return RetryOutcome::Exhausted {
                            reason: ExhaustionReason::Upstream(err),
                            attempts: attempt,
                        };
                    }
                }
            }

            sleep(self.policy.delay).await;
        }
    }
}

/// Reject replies that carry a provider failure marker.
fn screen_reply(text: String) -> Result<String, CompletionError> {
    if DISQUALIFYING_MARKERS
        .iter()
        .any(|marker| text.contains(marker))
    {
        Err(CompletionError::Disqualified)
    } else {
        Ok(text)
    }
}
