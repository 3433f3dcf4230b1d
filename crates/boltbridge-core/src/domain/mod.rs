//! Domain types.
//!
//! Pure data and pure functions; nothing here performs I/O.

pub mod catalog;
pub mod chat;
pub mod classifier;
pub mod envelope;

pub use catalog::{ModelEntry, TagEntry, model_catalog, tag_catalog};
pub use chat::{ChatMessage, MessageRole};
pub use classifier::is_code;
pub use envelope::{ChatEnvelope, EnvelopeData, EnvelopeMessage, EnvelopeStatus, format_response};
