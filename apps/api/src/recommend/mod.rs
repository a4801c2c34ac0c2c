// Role recommendation and skills-gap analysis.
// Implements: catalog-order role matching over the extracted skill set and the
// three-step merge of stored vs freshly computed missing-skills maps.

pub mod catalog;
pub mod gap;

pub use catalog::{recommend_job_roles, JOB_ROLES, NO_SKILLS_MESSAGE};
pub use gap::{merge_missing_skills, MissingSkillsMap};
