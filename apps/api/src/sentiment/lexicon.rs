//! Embedded valence lexicon for polarity scoring.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Word valences in [-1, 1]. Weights follow the convention of rule-based
/// polarity lexicons: strong evaluative words near the ends of the range,
/// mild ones near the middle.
pub(crate) static VALENCE: Lazy<HashMap<&'static str, f64>> = Lazy::new(|| {
    HashMap::from([
        // Positive
        ("excellent", 1.0),
        ("outstanding", 1.0),
        ("exceptional", 0.9),
        ("best", 0.9),
        ("great", 0.8),
        ("accomplished", 0.8),
        ("expert", 0.8),
        ("awarded", 0.8),
        ("won", 0.8),
        ("good", 0.7),
        ("proficient", 0.7),
        ("successful", 0.7),
        ("successfully", 0.7),
        ("innovative", 0.7),
        ("passionate", 0.7),
        ("enthusiastic", 0.7),
        ("achieved", 0.6),
        ("achievement", 0.6),
        ("skilled", 0.6),
        ("improved", 0.6),
        ("improvement", 0.6),
        ("efficient", 0.6),
        ("effective", 0.6),
        ("reliable", 0.6),
        ("strong", 0.6),
        ("optimized", 0.6),
        ("dedicated", 0.5),
        ("motivated", 0.5),
        ("committed", 0.5),
        ("creative", 0.5),
        ("leadership", 0.5),
        ("capable", 0.4),
        ("delivered", 0.4),
        ("solid", 0.4),
        // Negative
        ("worst", -1.0),
        ("terrible", -0.9),
        ("failed", -0.8),
        ("failure", -0.8),
        ("fired", -0.8),
        ("poor", -0.7),
        ("bad", -0.7),
        ("terminated", -0.6),
        ("weak", -0.5),
        ("unable", -0.5),
        ("wrong", -0.5),
        ("inexperienced", -0.5),
        ("struggled", -0.5),
        ("struggle", -0.5),
        ("lack", -0.5),
        ("lacking", -0.5),
        ("unfortunately", -0.4),
        ("difficult", -0.4),
        ("problem", -0.3),
        ("problems", -0.3),
        ("limited", -0.3),
        ("issues", -0.2),
    ])
});

/// Negators flip the valence of a lexicon word within a two-token window.
pub(crate) const NEGATIONS: &[&str] = &["not", "no", "never", "neither", "nor", "cannot", "without"];
