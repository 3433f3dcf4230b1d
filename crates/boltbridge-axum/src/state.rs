//! Shared application state type.

use crate::bootstrap::AxumContext;
use std::sync::Arc;

/// Application state shared across all handlers.
///
/// Read-only after bootstrap; requests never mutate it.
pub type AppState = Arc<AxumContext>;
