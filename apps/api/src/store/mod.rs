// Capacity-bounded record store over the `resumes` table.
// Implements: upsert by the (email, phone) dedup key, oldest-first eviction at
// the capacity bound, and the read paths (by id, top-N by score, count).

use serde_json::Value;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use crate::models::resume::ResumeRow;

/// Hard bound on stored records. Inserting beyond it evicts the oldest upload.
pub const MAX_RESUMES: i64 = 10;

// Advisory lock serializing the count → evict → insert sequence. Without it,
// two concurrent uploads can both pass the capacity check before either
// evicts, leaving the store above the bound.
const CAPACITY_LOCK_KEY: i64 = 0x5245_5355_4d45;

/// Fields computed by the screening pipeline for one upload.
pub struct NewResume {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub education: String,
    pub experience: i32,
    pub skills: String,
    pub ranking_score: f64,
    pub recommended_roles: String,
    pub sentiment: String,
    pub missing_skills: Value,
}

/// Creates or updates the record for `new`'s (email, phone) pair.
///
/// An existing record keeps its identity fields and gets its score, sentiment,
/// roles, and missing-skills overwritten. A new record may first evict the
/// oldest row to stay within `MAX_RESUMES`. The whole sequence runs in one
/// transaction under an advisory lock.
pub async fn upsert_resume(pool: &PgPool, new: &NewResume) -> Result<ResumeRow, sqlx::Error> {
    let mut tx = pool.begin().await?;

    sqlx::query("SELECT pg_advisory_xact_lock($1)")
        .bind(CAPACITY_LOCK_KEY)
        .execute(&mut *tx)
        .await?;

    let existing: Option<ResumeRow> =
        sqlx::query_as("SELECT * FROM resumes WHERE email = $1 AND phone = $2")
            .bind(&new.email)
            .bind(&new.phone)
            .fetch_optional(&mut *tx)
            .await?;

    let row = match existing {
        Some(existing) => {
            let row: ResumeRow = sqlx::query_as(
                r#"
                UPDATE resumes
                SET ranking_score = $1, sentiment = $2, recommended_roles = $3, missing_skills = $4
                WHERE id = $5
                RETURNING *
                "#,
            )
            .bind(new.ranking_score)
            .bind(&new.sentiment)
            .bind(&new.recommended_roles)
            .bind(&new.missing_skills)
            .bind(existing.id)
            .fetch_one(&mut *tx)
            .await?;
            info!("Updated existing resume {} for {}", row.id, row.email);
            row
        }
        None => {
            let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
                .fetch_one(&mut *tx)
                .await?;
            if count >= MAX_RESUMES {
                let evicted: Option<Uuid> = sqlx::query_scalar(
                    r#"
                    DELETE FROM resumes
                    WHERE id = (SELECT id FROM resumes ORDER BY uploaded_at ASC LIMIT 1)
                    RETURNING id
                    "#,
                )
                .fetch_optional(&mut *tx)
                .await?;
                if let Some(id) = evicted {
                    info!("Evicted oldest resume {id} to stay within capacity {MAX_RESUMES}");
                }
            }

            sqlx::query_as(
                r#"
                INSERT INTO resumes
                    (name, email, phone, education, experience, skills,
                     ranking_score, recommended_roles, sentiment, missing_skills)
                VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
                RETURNING *
                "#,
            )
            .bind(&new.name)
            .bind(&new.email)
            .bind(&new.phone)
            .bind(&new.education)
            .bind(new.experience)
            .bind(&new.skills)
            .bind(new.ranking_score)
            .bind(&new.recommended_roles)
            .bind(&new.sentiment)
            .bind(&new.missing_skills)
            .fetch_one(&mut *tx)
            .await?
        }
    };

    tx.commit().await?;
    Ok(row)
}

/// Fetches one record by id. `None` when the id does not exist.
pub async fn fetch_resume(pool: &PgPool, id: Uuid) -> Result<Option<ResumeRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM resumes WHERE id = $1")
        .bind(id)
        .fetch_optional(pool)
        .await
}

/// Returns up to `limit` records, best ranking score first. Unscored rows
/// sort last.
pub async fn top_resumes(pool: &PgPool, limit: i64) -> Result<Vec<ResumeRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM resumes ORDER BY ranking_score DESC NULLS LAST, uploaded_at DESC LIMIT $1",
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Current number of stored records.
pub async fn count_resumes(pool: &PgPool) -> Result<i64, sqlx::Error> {
    sqlx::query_scalar("SELECT COUNT(*) FROM resumes")
        .fetch_one(pool)
        .await
}
