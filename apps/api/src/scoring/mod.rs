// Candidate ranking.
// Implements: the fixed 3-feature score input, the total education-code
// mapping, and the pluggable scorer backed by a pretrained regression forest.

pub mod forest;

use std::path::Path;
use std::sync::Arc;
use tracing::{info, warn};

use self::forest::ForestScorer;

/// Column order the pretrained model was fit on. A score input is only
/// meaningful if its features line up with this schema exactly.
pub const FEATURE_SCHEMA: [&str; 3] = ["education", "experience", "skills"];

/// The fixed 3-number vector consumed by the scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreInput {
    pub education_code: u8,
    pub experience: f64,
    pub skill_count: usize,
}

impl ScoreInput {
    /// Features in training-schema order.
    pub fn features(&self) -> [f64; 3] {
        [
            f64::from(self.education_code),
            self.experience,
            self.skill_count as f64,
        ]
    }
}

/// Maps an education label to its numeric code. Total: any label outside the
/// four-way table, including "Unknown", maps to Bachelors by convention.
pub fn education_code(label: &str) -> u8 {
    match label {
        "Diploma" => 0,
        "Bachelors" => 1,
        "Masters" => 2,
        "PhD" => 3,
        _ => 1,
    }
}

/// The ranking scorer. Implement this to swap backends without touching the
/// pipeline or handlers.
///
/// Carried in `AppState` as `Arc<dyn RankingScorer>`, constructed once at
/// startup and shared read-only across requests.
pub trait RankingScorer: Send + Sync {
    fn predict(&self, input: &ScoreInput) -> f64;
    /// Backend name, for startup logging and transparency.
    fn backend(&self) -> &'static str;
}

/// Scorer used when no trained model artifact is available: every candidate
/// scores 0 and the pipeline continues.
pub struct FallbackScorer;

impl RankingScorer for FallbackScorer {
    fn predict(&self, _input: &ScoreInput) -> f64 {
        0.0
    }

    fn backend(&self) -> &'static str {
        "fallback"
    }
}

/// Loads the forest artifact, falling back to the constant-zero scorer when
/// the file is missing or malformed. Non-fatal by design; the condition is
/// logged once here at startup.
pub fn load_scorer(path: &Path) -> Arc<dyn RankingScorer> {
    match ForestScorer::from_file(path) {
        Ok(scorer) => {
            info!(
                "Loaded ranking forest ({} trees) from {}",
                scorer.tree_count(),
                path.display()
            );
            Arc::new(scorer)
        }
        Err(e) => {
            warn!(
                "Ranking model unavailable ({e:#}); all candidates will score 0 until an artifact is provided at {}",
                path.display()
            );
            Arc::new(FallbackScorer)
        }
    }
}
