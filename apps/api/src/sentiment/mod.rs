// Sentiment classification over raw resume text.
// Lexicon-driven polarity in [-1, 1]; the label is decided strictly by sign,
// with no magnitude threshold.

mod lexicon;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

use lexicon::{NEGATIONS, VALENCE};

/// Resume sentiment label. Defaults to Neutral, matching a polarity of zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sentiment {
    Positive,
    #[default]
    Neutral,
    Negative,
}

impl Sentiment {
    /// Classifies strictly by sign: any positive score is Positive, any
    /// negative score is Negative, exactly zero is Neutral.
    pub fn from_polarity(score: f64) -> Self {
        if score > 0.0 {
            Sentiment::Positive
        } else if score < 0.0 {
            Sentiment::Negative
        } else {
            Sentiment::Neutral
        }
    }

    pub fn classify(text: &str) -> Self {
        Self::from_polarity(polarity(text))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Sentiment::Positive => "Positive",
            Sentiment::Neutral => "Neutral",
            Sentiment::Negative => "Negative",
        }
    }
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

static WORD_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z]+").unwrap());

/// Aggregate polarity of the text in [-1, 1].
///
/// The mean valence of all lexicon words found, with a negator in the two
/// preceding tokens flipping a word's sign. Text with no lexicon words scores
/// exactly 0.0.
pub fn polarity(text: &str) -> f64 {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = WORD_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut sum = 0.0;
    let mut hits = 0u32;

    for (i, token) in tokens.iter().enumerate() {
        if let Some(&valence) = VALENCE.get(token) {
            let window = &tokens[i.saturating_sub(2)..i];
            let negated = window.iter().any(|t| NEGATIONS.contains(t));
            sum += if negated { -valence } else { valence };
            hits += 1;
        }
    }

    if hits == 0 {
        0.0
    } else {
        (sum / f64::from(hits)).clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_polarity_is_neutral() {
        assert_eq!(Sentiment::from_polarity(0.0), Sentiment::Neutral);
    }

    #[test]
    fn test_tiny_positive_polarity_is_positive() {
        assert_eq!(Sentiment::from_polarity(0.0001), Sentiment::Positive);
    }

    #[test]
    fn test_tiny_negative_polarity_is_negative() {
        assert_eq!(Sentiment::from_polarity(-0.0001), Sentiment::Negative);
    }

    #[test]
    fn test_empty_text_scores_zero() {
        assert_eq!(polarity(""), 0.0);
        assert_eq!(Sentiment::classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_positive_text_classifies_positive() {
        let text = "Accomplished engineer with excellent communication and strong results.";
        assert!(polarity(text) > 0.0);
        assert_eq!(Sentiment::classify(text), Sentiment::Positive);
    }

    #[test]
    fn test_negative_text_classifies_negative() {
        let text = "Terminated after a failed project; poor fit for the team.";
        assert!(polarity(text) < 0.0);
        assert_eq!(Sentiment::classify(text), Sentiment::Negative);
    }

    #[test]
    fn test_negation_flips_valence() {
        assert!(polarity("a good engineer") > 0.0);
        assert!(polarity("not a good engineer") < 0.0);
    }

    #[test]
    fn test_polarity_stays_in_range() {
        let text = "excellent excellent excellent outstanding best";
        let score = polarity(text);
        assert!((-1.0..=1.0).contains(&score));
    }

    #[test]
    fn test_default_label_is_neutral() {
        assert_eq!(Sentiment::default().label(), "Neutral");
    }
}
