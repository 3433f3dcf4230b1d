//! Services built on top of the completion port.

pub mod retriever;
pub mod retry;

pub use retriever::{CompletionRetriever, DEFAULT_MODEL};
pub use retry::{
    CodeResponseLoop, DISQUALIFYING_MARKERS, ExhaustionReason, NO_CODE_MESSAGE, RetryOutcome,
    RetryPolicy,
};
