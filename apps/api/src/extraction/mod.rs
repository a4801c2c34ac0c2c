// Resume feature extraction.
// Implements: PDF text pull, field heuristics (name/email/phone/education/experience),
// phrase-level skill matching against the fixed vocabulary, and the injectable
// entity-tagger fallback for name detection.

pub mod features;
pub mod ner;
pub mod skills;
pub mod text;

// Re-export the public API consumed by other modules (pipeline, handlers).
pub use features::{extract_features, FeatureSet, NOT_PROVIDED, UNKNOWN};
pub use ner::{CapitalizedSpanTagger, EntityTagger};
pub use skills::{extract_skills, join_skills, split_skills};
pub use text::extract_text;
