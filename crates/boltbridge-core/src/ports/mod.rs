//! Port definitions (trait abstractions) for external systems.
//!
//! The gateway has a single outbound dependency: the completion provider.
//! Adapters (HTTP clients, test stubs) implement [`CompletionProvider`].

pub mod completion;

pub use completion::{
    CompletionError, CompletionProvider, CompletionReply, ReplyChoice, ReplyMessage,
    StructuredReply,
};
