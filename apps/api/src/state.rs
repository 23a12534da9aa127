use std::sync::Arc;

use crate::ats::scorer::ResumeScorer;
use crate::config::Config;
use crate::store::ScoreStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub store: ScoreStore,
    /// Pluggable resume scorer. Default: KeywordResumeScorer.
    pub scorer: Arc<dyn ResumeScorer>,
}
