//! The fixed role catalog and the recommendation pass over it.

use std::collections::BTreeSet;

use crate::recommend::gap::MissingSkillsMap;

/// Pseudo-role returned when the candidate has no recognized skills at all.
/// Distinct from an empty recommendation list, which means skills were present
/// but matched no role.
pub const NO_SKILLS_MESSAGE: &str = "No skills found. Try adding skills to your resume.";

/// Role catalog in iteration order, each with its required skills (lowercase,
/// in display order). Recommendations are appended in catalog order, not
/// sorted by match strength.
pub const JOB_ROLES: &[(&str, &[&str])] = &[
    ("Software Engineer", &["python", "java", "c++", "software development"]),
    ("Data Scientist", &["python", "data analysis", "machine learning", "statistics"]),
    ("Web Developer", &["html", "css", "javascript", "react", "node.js"]),
    ("Data Analyst", &["excel", "sql", "data visualization", "python"]),
    ("Product Manager", &["agile", "project management", "team leadership"]),
    ("UX Designer", &["design", "ux/ui", "prototyping", "figma"]),
];

/// Recommends roles for a skill set and reports the required skills missing
/// per recommended role.
///
/// A role is recommended when at least one of its required skills is present.
/// The experience argument is part of the call contract; the original lower
/// bound of zero holds by construction for an unsigned value, so it does not
/// affect the outcome.
pub fn recommend_job_roles(
    skills: &BTreeSet<String>,
    _experience: u32,
) -> (Vec<String>, MissingSkillsMap) {
    if skills.is_empty() {
        return (vec![NO_SKILLS_MESSAGE.to_string()], MissingSkillsMap::new());
    }

    let mut recommended = Vec::new();
    let mut missing_skills = MissingSkillsMap::new();

    for (role, required) in JOB_ROLES {
        let matched = required.iter().any(|skill| skills.contains(*skill));
        if matched {
            recommended.push((*role).to_string());

            let missing: Vec<String> = required
                .iter()
                .filter(|skill| !skills.contains(**skill))
                .map(|skill| (*skill).to_string())
                .collect();
            if !missing.is_empty() {
                missing_skills.insert((*role).to_string(), missing);
            }
        }
    }

    (recommended, missing_skills)
}
