//! Core of the boltbridge gateway.
//!
//! Holds everything that does not depend on a web framework or an HTTP
//! client: the Bolt response envelope, the code classifier, the static
//! catalogs, the completion provider port and the retry loop that drives it.

#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod ports;
pub mod services;

pub use domain::{
    ChatEnvelope, ChatMessage, EnvelopeData, EnvelopeMessage, EnvelopeStatus, MessageRole,
    ModelEntry, TagEntry, format_response, is_code, model_catalog, tag_catalog,
};
pub use ports::{
    CompletionError, CompletionProvider, CompletionReply, ReplyChoice, ReplyMessage,
    StructuredReply,
};
pub use services::{
    CodeResponseLoop, CompletionRetriever, DEFAULT_MODEL, DISQUALIFYING_MARKERS, ExhaustionReason,
    NO_CODE_MESSAGE, RetryOutcome, RetryPolicy,
};
