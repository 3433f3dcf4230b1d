//! Static catalog endpoints.

use axum::Json;
use boltbridge_core::{ModelEntry, TagEntry, model_catalog, tag_catalog};

/// `GET /api/chat/models`
pub async fn models() -> Json<Vec<ModelEntry>> {
    Json(model_catalog())
}

/// `GET /api/chat/api/tags`
pub async fn tags() -> Json<Vec<TagEntry>> {
    Json(tag_catalog())
}
