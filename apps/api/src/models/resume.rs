use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use sqlx::FromRow;
use uuid::Uuid;

/// A screened resume as persisted in the `resumes` table.
///
/// `skills` and `recommended_roles` hold their comma-joined stored forms;
/// `missing_skills` is the JSON object mapping role name to missing skills.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: i32,
    pub skills: String,
    pub ranking_score: Option<f64>,
    pub recommended_roles: String,
    pub sentiment: String,
    pub missing_skills: Value,
    pub uploaded_at: DateTime<Utc>,
}
