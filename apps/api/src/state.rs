use std::sync::Arc;

use sqlx::SqlitePool;

use crate::ai::TextImprover;
use crate::config::Config;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: SqlitePool,
    /// Pluggable text-improvement backend. Production: `GeminiClient`.
    /// Tests swap in a canned implementation.
    pub ai: Arc<dyn TextImprover>,
    pub config: Config,
}
