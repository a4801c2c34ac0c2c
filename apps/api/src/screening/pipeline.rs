//! The request-scoped screening pipeline.
//!
//! One synchronous pass per upload: features, sentiment, role
//! recommendations with gaps, then the ranking score. Every stage is
//! best-effort and resolves to sentinels rather than erroring, so the
//! pipeline as a whole cannot fail.

use crate::extraction::{extract_features, EntityTagger, FeatureSet};
use crate::recommend::{recommend_job_roles, MissingSkillsMap};
use crate::scoring::{education_code, RankingScorer, ScoreInput};
use crate::sentiment::Sentiment;

/// Everything the pipeline derives from one resume's text.
#[derive(Debug)]
pub struct ScreeningOutcome {
    pub features: FeatureSet,
    pub sentiment: Sentiment,
    pub recommended_roles: Vec<String>,
    pub missing_skills: MissingSkillsMap,
    pub ranking_score: f64,
}

/// Runs the full pipeline over extracted text.
pub fn screen_resume(
    text: &str,
    tagger: &dyn EntityTagger,
    scorer: &dyn RankingScorer,
) -> ScreeningOutcome {
    let features = extract_features(text, tagger);
    let sentiment = Sentiment::classify(text);
    let (recommended_roles, missing_skills) =
        recommend_job_roles(&features.skills, features.experience);

    let input = ScoreInput {
        education_code: education_code(&features.education),
        experience: f64::from(features.experience),
        skill_count: features.skills.len(),
    };
    let ranking_score = scorer.predict(&input);

    ScreeningOutcome {
        features,
        sentiment,
        recommended_roles,
        missing_skills,
        ranking_score,
    }
}

/// Normalizes an extracted name for display. Scanned headers sometimes read
/// "Resume - Jane Doe"; only the segment after the last dash is kept.
pub fn display_name(raw: &str) -> String {
    raw.rsplit('-').next().unwrap_or(raw).trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::NO_SKILLS_MESSAGE;
    use crate::scoring::FallbackScorer;

    struct NullTagger;

    impl EntityTagger for NullTagger {
        fn first_person(&self, _text: &str) -> Option<String> {
            None
        }
    }

    /// Scorer stub that records nothing and returns a fixed score.
    struct ConstScorer(f64);

    impl RankingScorer for ConstScorer {
        fn predict(&self, _input: &ScoreInput) -> f64 {
            self.0
        }

        fn backend(&self) -> &'static str {
            "const"
        }
    }

    const SAMPLE: &str = "John Smith\nSoftware Engineer\njohn@example.com\n+1-555-1234567\n5 years experience\nSkills: Python, SQL";

    #[test]
    fn test_pipeline_end_to_end_over_sample_text() {
        let outcome = screen_resume(SAMPLE, &NullTagger, &ConstScorer(42.0));

        assert_eq!(outcome.features.name, "John Smith");
        assert_eq!(outcome.features.experience, 5);
        assert_eq!(outcome.ranking_score, 42.0);
        // python matches Software Engineer and Data Scientist; sql matches
        // Data Analyst; all in catalog order.
        assert_eq!(
            outcome.recommended_roles,
            vec!["Software Engineer", "Data Scientist", "Data Analyst"]
        );
        assert!(outcome.missing_skills["Data Scientist"]
            .contains(&"machine learning".to_string()));
    }

    #[test]
    fn test_empty_text_degrades_to_pseudo_role() {
        let outcome = screen_resume("", &NullTagger, &FallbackScorer);
        assert_eq!(outcome.recommended_roles, vec![NO_SKILLS_MESSAGE]);
        assert!(outcome.missing_skills.is_empty());
        assert_eq!(outcome.sentiment, Sentiment::Neutral);
        assert_eq!(outcome.ranking_score, 0.0);
    }

    #[test]
    fn test_score_input_derived_from_features() {
        struct CapturingScorer;

        impl RankingScorer for CapturingScorer {
            fn predict(&self, input: &ScoreInput) -> f64 {
                // Unknown education maps to Bachelors(1); two skills; 5 years.
                assert_eq!(input.education_code, 1);
                assert_eq!(input.experience, 5.0);
                assert_eq!(input.skill_count, 2);
                7.0
            }

            fn backend(&self) -> &'static str {
                "capturing"
            }
        }

        let outcome = screen_resume(SAMPLE, &NullTagger, &CapturingScorer);
        assert_eq!(outcome.ranking_score, 7.0);
    }

    #[test]
    fn test_display_name_strips_scanned_prefix() {
        assert_eq!(display_name("Resume - John Smith"), "John Smith");
        assert_eq!(display_name("John Smith"), "John Smith");
        assert_eq!(display_name("  Unknown  "), "Unknown");
    }
}
