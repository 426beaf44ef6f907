use std::sync::Arc;

use crate::config::Config;
use crate::evaluation::scoring::TranscriptEvaluator;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Pluggable transcript evaluator, selected once at startup from config:
    /// heuristic-only, or LLM-first with heuristic fallback.
    pub evaluator: Arc<dyn TranscriptEvaluator>,
    /// Kept on state for handlers that need runtime settings.
    #[allow(dead_code)]
    pub config: Config,
}
