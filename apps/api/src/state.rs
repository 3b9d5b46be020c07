use std::sync::Arc;

use crate::config::Config;
use crate::skills::backends::SkillExtractor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable extraction backend. Default: KeywordSkillExtractor. Swap via SKILL_BACKEND.
    pub extractor: Arc<dyn SkillExtractor>,
}
