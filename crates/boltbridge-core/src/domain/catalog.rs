//! Static catalogs advertised to the front-end.

use serde::{Deserialize, Serialize};

/// A model the front-end may offer in its picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelEntry {
    pub name: String,
    pub description: String,
}

/// A tag entry for the Ollama-style `api/tags` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagEntry {
    pub tag: String,
}

const MODELS: &[(&str, &str)] = &[("gpt-4o", "GPT-4 Optimized"), ("gpt-4", "GPT-4")];

const TAGS: &[&str] = &["example1", "example2", "example3"];

/// Advertised models, in a stable order.
#[must_use]
pub fn model_catalog() -> Vec<ModelEntry> {
    MODELS
        .iter()
        .map(|(name, description)| ModelEntry {
            name: (*name).to_string(),
            description: (*description).to_string(),
        })
        .collect()
}

/// Advertised tags, in a stable order.
#[must_use]
pub fn tag_catalog() -> Vec<TagEntry> {
    TAGS.iter()
        .map(|tag| TagEntry {
            tag: (*tag).to_string(),
        })
        .collect()
}
