//! Merging of stored and freshly computed missing-skills maps.

use std::collections::{BTreeMap, BTreeSet};

/// Role name → required skills the candidate lacks, in first-seen order.
pub type MissingSkillsMap = BTreeMap<String, Vec<String>>;

/// Merges a previously stored missing-skills map with a freshly computed one.
///
/// Three steps, in a fixed order:
/// 1. union the per-role lists (de-duplicated, stored entries first),
/// 2. drop every skill the candidate currently possesses,
/// 3. restrict the map to roles in the current recommended list.
///
/// Subtracting before the union would resurrect a skill the candidate learned
/// between two uploads if the stored map still lists it, so the order is part
/// of the contract.
pub fn merge_missing_skills(
    stored: &MissingSkillsMap,
    fresh: &MissingSkillsMap,
    current_skills: &BTreeSet<String>,
    current_roles: &[String],
) -> MissingSkillsMap {
    let mut merged = MissingSkillsMap::new();
    for (role, skills) in stored.iter().chain(fresh.iter()) {
        let entry = merged.entry(role.clone()).or_default();
        for skill in skills {
            if !entry.contains(skill) {
                entry.push(skill.clone());
            }
        }
    }

    for skills in merged.values_mut() {
        skills.retain(|skill| !current_skills.contains(&skill.trim().to_lowercase()));
    }

    merged.retain(|role, _| current_roles.iter().any(|r| r == role));
    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &[&str])]) -> MissingSkillsMap {
        entries
            .iter()
            .map(|(role, skills)| {
                (
                    role.to_string(),
                    skills.iter().map(|s| s.to_string()).collect(),
                )
            })
            .collect()
    }

    fn skills(items: &[&str]) -> BTreeSet<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn roles(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_merge_with_self_is_idempotent() {
        let stored = map(&[("Data Scientist", &["statistics", "machine learning"])]);
        let current = skills(&["python"]);
        let role_list = roles(&["Data Scientist"]);

        let once = merge_missing_skills(&stored, &stored, &current, &role_list);
        let against_empty =
            merge_missing_skills(&stored, &MissingSkillsMap::new(), &current, &role_list);
        assert_eq!(once, against_empty);
    }

    #[test]
    fn test_union_deduplicates_and_keeps_stored_order() {
        let stored = map(&[("Web Developer", &["react", "node.js"])]);
        let fresh = map(&[("Web Developer", &["node.js", "html"])]);

        let merged = merge_missing_skills(
            &stored,
            &fresh,
            &BTreeSet::new(),
            &roles(&["Web Developer"]),
        );
        assert_eq!(
            merged.get("Web Developer"),
            Some(&vec![
                "react".to_string(),
                "node.js".to_string(),
                "html".to_string(),
            ])
        );
    }

    #[test]
    fn test_learned_skill_is_removed_even_if_stored() {
        // The candidate picked up sql between uploads; the stale stored entry
        // must not survive the merge.
        let stored = map(&[("Data Analyst", &["sql", "excel"])]);
        let fresh = map(&[("Data Analyst", &["sql"])]);
        let current = skills(&["sql", "python"]);

        let merged = merge_missing_skills(&stored, &fresh, &current, &roles(&["Data Analyst"]));
        assert_eq!(merged.get("Data Analyst"), Some(&vec!["excel".to_string()]));
    }

    #[test]
    fn test_roles_no_longer_recommended_are_dropped() {
        let stored = map(&[
            ("Data Scientist", &["statistics"]),
            ("UX Designer", &["figma"]),
        ]);

        let merged = merge_missing_skills(
            &stored,
            &MissingSkillsMap::new(),
            &BTreeSet::new(),
            &roles(&["Data Scientist"]),
        );
        assert!(merged.contains_key("Data Scientist"));
        assert!(!merged.contains_key("UX Designer"));
    }

    #[test]
    fn test_empty_inputs_merge_to_empty() {
        let merged = merge_missing_skills(
            &MissingSkillsMap::new(),
            &MissingSkillsMap::new(),
            &BTreeSet::new(),
            &[],
        );
        assert!(merged.is_empty());
    }

    #[test]
    fn test_role_fully_learned_keeps_empty_list() {
        // Subtraction may empty a role's list; the role stays in the map as
        // long as it is still recommended.
        let stored = map(&[("Data Analyst", &["sql"])]);
        let current = skills(&["sql"]);

        let merged = merge_missing_skills(
            &stored,
            &MissingSkillsMap::new(),
            &current,
            &roles(&["Data Analyst"]),
        );
        assert_eq!(merged.get("Data Analyst"), Some(&Vec::new()));
    }
}
