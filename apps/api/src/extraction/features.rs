//! Field extraction from raw resume text.
//!
//! Every field resolves to a documented sentinel when nothing matches; this
//! module never returns an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;

use crate::extraction::ner::EntityTagger;
use crate::extraction::skills::extract_skills;

/// Sentinel for a name or education label no heuristic could resolve.
pub const UNKNOWN: &str = "Unknown";
/// Sentinel for an absent email address or phone number.
pub const NOT_PROVIDED: &str = "Not Provided";

/// Structured attributes extracted from one resume's raw text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureSet {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: u32,
    pub skills: BTreeSet<String>,
}

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\w.-]+@[\w.-]+\.\w+").unwrap());

// Tolerant international shape: optional country code, optional area code,
// then a 4-5 digit group and a 3-5 digit group with optional separators.
static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(\+?\d{1,3}[-.\s]?)?(\(?\d{2,4}\)?[-.\s]?)?\d{4,5}[-.\s]?\d{3,5}").unwrap()
});

static EXPERIENCE_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)\s+(years|yrs|year)").unwrap());

// A line that is nothing but a long digit run (a phone number without
// separators) can never be a name.
static BARE_NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\+?\d{10,}$").unwrap());

/// Education vocabulary in priority order; the first keyword found as a
/// case-insensitive substring wins, so the traversal order is part of the
/// contract.
const EDUCATION_KEYWORDS: [&str; 8] = [
    "Diploma", "Engineering", "Bachelors", "Masters", "PhD", "B.Sc", "BEng", "M.Sc",
];

const NAME_REJECT_SYMBOLS: &str = "!@#$%^&*(){}[]<>?/|\\";
const NAME_REJECT_HEADERS: [&str; 3] = ["PROFILE", "EMAIL", "PHONE"];

/// Extracts all resume features from raw text.
///
/// The tagger is only consulted when the line-based name heuristic fails.
pub fn extract_features(text: &str, tagger: &dyn EntityTagger) -> FeatureSet {
    FeatureSet {
        name: extract_name(text, tagger),
        email: EMAIL_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        phone: PHONE_RE
            .find(text)
            .map(|m| m.as_str().to_string())
            .unwrap_or_else(|| NOT_PROVIDED.to_string()),
        education: extract_education(text),
        experience: extract_experience(text),
        skills: extract_skills(text),
    }
}

/// Scans the first 5 non-blank lines for a plausible name line, then falls
/// back to the entity tagger over the full text.
fn extract_name(text: &str, tagger: &dyn EntityTagger) -> String {
    let lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    for line in lines.take(5) {
        if is_plausible_name(line) {
            return line.to_string();
        }
    }

    tagger
        .first_person(text)
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn is_plausible_name(line: &str) -> bool {
    !BARE_NUMBER_RE.is_match(line)
        && line.split_whitespace().count() <= 4
        && !line.chars().any(|c| NAME_REJECT_SYMBOLS.contains(c))
        && {
            let upper = line.to_uppercase();
            !NAME_REJECT_HEADERS.iter().any(|h| upper.contains(h))
        }
        && !line.chars().all(|c| c.is_ascii_digit())
}

fn extract_education(text: &str) -> String {
    let lowered = text.to_lowercase();
    EDUCATION_KEYWORDS
        .iter()
        .find(|kw| lowered.contains(&kw.to_lowercase()))
        .map(|kw| kw.to_string())
        .unwrap_or_else(|| UNKNOWN.to_string())
}

fn extract_experience(text: &str) -> u32 {
    EXPERIENCE_RE
        .captures(text)
        .and_then(|cap| cap.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}
