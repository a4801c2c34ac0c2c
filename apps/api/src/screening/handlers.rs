//! Axum route handlers for the Screening API.

use axum::{
    extract::{Multipart, Path, State},
    Json,
};
use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::analytics::{summarize, AnalyticsSummary};
use crate::errors::AppError;
use crate::extraction::{extract_text, join_skills, split_skills};
use crate::models::resume::ResumeRow;
use crate::recommend::{merge_missing_skills, recommend_job_roles, MissingSkillsMap};
use crate::screening::pipeline::{display_name, screen_resume};
use crate::state::AppState;
use crate::store::{self, NewResume, MAX_RESUMES};

// ────────────────────────────────────────────────────────────────────────────
// Response types
// ────────────────────────────────────────────────────────────────────────────

/// Screening result for one record: the stored row plus the merged, filtered
/// missing-skills view.
#[derive(Debug, Serialize)]
pub struct ScreeningResultResponse {
    pub resume: ResumeRow,
    pub recommended_roles: Vec<String>,
    pub sentiment: String,
    pub missing_skills: MissingSkillsMap,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/resumes
///
/// Accepts a multipart upload with a `resume` PDF field, runs the screening
/// pipeline, and upserts the record by its (email, phone) dedup key.
pub async fn handle_upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ResumeRow>, AppError> {
    let mut pdf_bytes: Option<bytes::Bytes> = None;
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("invalid multipart body: {e}")))?
    {
        if field.name() == Some("resume") {
            pdf_bytes = Some(field.bytes().await.map_err(|e| {
                AppError::Validation(format!("failed to read resume field: {e}"))
            })?);
            break;
        }
    }
    let pdf_bytes =
        pdf_bytes.ok_or_else(|| AppError::Validation("multipart field 'resume' is required".to_string()))?;

    let text = extract_text(&pdf_bytes);
    let outcome = screen_resume(&text, state.tagger.as_ref(), state.scorer.as_ref());

    let new = NewResume {
        name: display_name(&outcome.features.name),
        email: outcome.features.email.clone(),
        phone: outcome.features.phone.clone(),
        education: outcome.features.education.clone(),
        experience: i32::try_from(outcome.features.experience).unwrap_or(i32::MAX),
        skills: join_skills(&outcome.features.skills),
        ranking_score: outcome.ranking_score,
        recommended_roles: outcome.recommended_roles.join(", "),
        sentiment: outcome.sentiment.to_string(),
        missing_skills: serde_json::to_value(&outcome.missing_skills)
            .unwrap_or_else(|_| serde_json::json!({})),
    };

    let row = store::upsert_resume(&state.db, &new).await?;
    let count = store::count_resumes(&state.db).await?;
    info!(
        "Screened resume {} (score {:.2}); store holds {count}/{MAX_RESUMES} records",
        row.id, outcome.ranking_score
    );

    Ok(Json(row))
}

/// GET /api/v1/resumes/:id
///
/// Returns the stored record with its missing-skills map merged against a
/// fresh catalog pass over the stored skill set.
pub async fn handle_screening_result(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ScreeningResultResponse>, AppError> {
    let row = store::fetch_resume(&state.db, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Resume {id} not found")))?;

    let skills = split_skills(&row.skills);
    let experience = u32::try_from(row.experience).unwrap_or(0);
    let (recommended_roles, fresh) = recommend_job_roles(&skills, experience);

    let stored: MissingSkillsMap =
        serde_json::from_value(row.missing_skills.clone()).unwrap_or_default();
    let missing_skills = merge_missing_skills(&stored, &fresh, &skills, &recommended_roles);

    Ok(Json(ScreeningResultResponse {
        recommended_roles,
        sentiment: row.sentiment.clone(),
        missing_skills,
        resume: row,
    }))
}

/// GET /api/v1/resumes
///
/// Top records by ranking score, bounded by the store capacity.
pub async fn handle_list_resumes(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResumeRow>>, AppError> {
    let rows = store::top_resumes(&state.db, MAX_RESUMES).await?;
    Ok(Json(rows))
}

/// GET /api/v1/analytics
///
/// Aggregates over the top records: skill frequencies, scores, education
/// histogram, sentiment counts.
pub async fn handle_analytics(
    State(state): State<AppState>,
) -> Result<Json<AnalyticsSummary>, AppError> {
    let rows = store::top_resumes(&state.db, MAX_RESUMES).await?;
    Ok(Json(summarize(&rows)))
}
