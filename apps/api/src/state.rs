use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::extraction::EntityTagger;
use crate::scoring::RankingScorer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    pub config: Config,
    /// Ranking scorer loaded once at startup: the pretrained forest when the
    /// artifact is present, the constant-zero fallback otherwise.
    pub scorer: Arc<dyn RankingScorer>,
    /// Entity tagger consulted when the line-based name heuristic fails.
    pub tagger: Arc<dyn EntityTagger>,
}
