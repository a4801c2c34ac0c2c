//! Skill recognition against a fixed, curated vocabulary.
//!
//! Single-token entries are matched against the tokenized text; entries with
//! spaces or other separators are matched as whole phrases so compound skills
//! like "machine learning" survive tokenization.

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{BTreeSet, HashSet};

/// The curated skill vocabulary, lowercase. Spans IT, data, finance, office
/// tooling, healthcare, sales, HR, supply chain, education, legal, and design
/// so non-engineering resumes still produce a usable skill set.
pub const SKILL_VOCABULARY: &[&str] = &[
    // Information technology & software development
    "python",
    "java",
    "c",
    "c++",
    "c#",
    "ruby",
    "swift",
    "kotlin",
    "go",
    "rust",
    "html",
    "css",
    "javascript",
    "typescript",
    "react",
    "angular",
    "vue.js",
    "node.js",
    "sql",
    "mysql",
    "postgresql",
    "mongodb",
    "firebase",
    "redis",
    "oracle",
    "aws",
    "azure",
    "google cloud",
    "docker",
    "kubernetes",
    "terraform",
    "jenkins",
    "machine learning",
    "deep learning",
    "tensorflow",
    "pytorch",
    "nlp",
    "computer vision",
    "ethical hacking",
    "cybersecurity",
    "network security",
    "siem",
    // Data science & business intelligence
    "data analysis",
    "data visualization",
    "power bi",
    "tableau",
    "excel",
    "big data",
    "hadoop",
    "apache spark",
    "google analytics",
    "business intelligence",
    "market research",
    "data mining",
    // Finance & accounting
    "financial modeling",
    "investment analysis",
    "risk management",
    "taxation",
    "auditing",
    "budgeting",
    "forecasting",
    "quickbooks",
    "sap",
    "tally",
    "xero",
    "oracle financials",
    // Office productivity
    "ms word",
    "ms excel",
    "ms powerpoint",
    "ms outlook",
    "ms teams",
    "google docs",
    "google sheets",
    "google slides",
    "microsoft office",
    "google workspace",
    // Healthcare & medical
    "medical coding",
    "patient care",
    "pharmacology",
    "nursing",
    "electronic medical records (emr)",
    "medical billing",
    "health informatics",
    "public health",
    "epidemiology",
    "radiology",
    // Sales & marketing
    "digital marketing",
    "seo",
    "sem",
    "ppc",
    "social media marketing",
    "content marketing",
    "email marketing",
    "crm",
    "salesforce",
    "hubspot",
    "lead generation",
    // Human resources & recruiting
    "talent acquisition",
    "employee relations",
    "hr analytics",
    "payroll management",
    "compensation & benefits",
    "labor laws",
    "linkedin recruiting",
    "applicant tracking system (ats)",
    // Manufacturing & supply chain
    "inventory management",
    "logistics",
    "procurement",
    "vendor management",
    "lean manufacturing",
    "six sigma",
    "quality assurance (qa)",
    "sap erp",
    "supply chain analytics",
    // Education & training
    "curriculum development",
    "instructional design",
    "e-learning",
    "learning management system (lms)",
    "online teaching",
    "public speaking",
    "academic research",
    "student engagement",
    // Legal & compliance
    "corporate law",
    "intellectual property (ip)",
    "legal research",
    "contract drafting",
    "litigation",
    "compliance & risk management",
    "regulatory affairs",
    "government relations",
    // Design & creative
    "graphic design",
    "ui/ux",
    "adobe photoshop",
    "illustrator",
    "figma",
    "3d modeling",
    "motion graphics",
    "animation",
    "video editing",
    "interior design",
    "fashion design",
    "cad software",
];

// Token shape shared by the tokenizer and the single-token test below.
// Dots, hashes, pluses, and dashes stay inside a token so entries like
// "node.js", "c#", "c++", and "e-learning" survive as one unit.
static TOKEN_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"[a-z0-9#+./&-]+").unwrap());

/// Scans the text for vocabulary entries and returns the recognized skills,
/// lowercase and de-duplicated.
pub fn extract_skills(text: &str) -> BTreeSet<String> {
    let lowered = text.to_lowercase();
    let tokens: HashSet<&str> = TOKEN_RE.find_iter(&lowered).map(|m| m.as_str()).collect();

    let mut found = BTreeSet::new();
    for &skill in SKILL_VOCABULARY {
        let matched = if is_single_token(skill) {
            tokens.contains(skill)
        } else {
            contains_phrase(&lowered, skill)
        };
        if matched {
            found.insert(skill.to_string());
        }
    }
    found
}

/// Serializes a skill set in its stored form: sorted, comma-joined, lowercase.
pub fn join_skills(skills: &BTreeSet<String>) -> String {
    skills.iter().cloned().collect::<Vec<_>>().join(", ")
}

/// Parses the stored comma-joined form back into a skill set.
pub fn split_skills(joined: &str) -> BTreeSet<String> {
    joined
        .split(',')
        .map(|s| s.trim().to_lowercase())
        .filter(|s| !s.is_empty())
        .collect()
}

fn is_single_token(skill: &str) -> bool {
    TOKEN_RE
        .find(skill)
        .is_some_and(|m| m.start() == 0 && m.end() == skill.len())
}

/// Whole-phrase containment check: the phrase must not be embedded inside a
/// longer alphanumeric run ("excel" must not match "excellent").
fn contains_phrase(text: &str, phrase: &str) -> bool {
    let mut from = 0;
    while let Some(pos) = text[from..].find(phrase) {
        let begin = from + pos;
        let end = begin + phrase.len();
        let boundary_before = text[..begin]
            .chars()
            .next_back()
            .map_or(true, |c| !c.is_alphanumeric());
        let boundary_after = text[end..]
            .chars()
            .next()
            .map_or(true, |c| !c.is_alphanumeric());
        if boundary_before && boundary_after {
            return true;
        }
        from = begin + 1;
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_token_skills_are_recognized() {
        let skills = extract_skills("Proficient in Python, SQL and Docker.");
        assert!(skills.contains("python"));
        assert!(skills.contains("sql"));
        assert!(skills.contains("docker"));
    }

    #[test]
    fn test_compound_skills_match_as_phrases() {
        let skills = extract_skills("Applied Machine Learning and Data Analysis at scale.");
        assert!(skills.contains("machine learning"));
        assert!(skills.contains("data analysis"));
    }

    #[test]
    fn test_dotted_and_symbol_tokens_survive() {
        let skills = extract_skills("Built services in C++ and C#, frontends in Node.js");
        assert!(skills.contains("c++"));
        assert!(skills.contains("c#"));
        assert!(skills.contains("node.js"));
    }

    #[test]
    fn test_duplicates_collapse() {
        let skills = extract_skills("python python PYTHON Python");
        assert_eq!(skills.len(), 1);
    }

    #[test]
    fn test_phrase_not_matched_inside_longer_word() {
        // "excel" must not fire on "excellent", nor "java" on "javascript".
        let skills = extract_skills("An excellent communicator.");
        assert!(!skills.contains("excel"));
        let skills = extract_skills("javascript only");
        assert!(skills.contains("javascript"));
        assert!(!skills.contains("java"));
    }

    #[test]
    fn test_no_matches_yields_empty_set() {
        assert!(extract_skills("gardening and birdwatching").is_empty());
    }

    #[test]
    fn test_join_is_sorted_and_comma_separated() {
        let skills: BTreeSet<String> =
            ["sql", "python", "aws"].iter().map(|s| s.to_string()).collect();
        assert_eq!(join_skills(&skills), "aws, python, sql");
    }

    #[test]
    fn test_split_round_trips_and_drops_blanks() {
        let set = split_skills("aws, python, sql");
        assert_eq!(set.len(), 3);
        assert!(set.contains("python"));
        assert!(split_skills("").is_empty());
        assert!(split_skills(" , ").is_empty());
    }
}
