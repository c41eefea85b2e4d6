//! Analysis and roadmap persistence.
//! CRITICAL: both tables are append-only. Never UPDATE or DELETE rows.

use sqlx::types::Json;
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::models::analysis::AnalysisRow;
use crate::models::roadmap::{RoadmapRow, WeekPlan};
use crate::readiness::pipeline::{AnalysisDraft, AnalysisMode};

/// History page size.
pub const HISTORY_LIMIT: i64 = 10;

/// Takes a connection so the handler can insert the analysis and its
/// roadmap in one transaction.
pub async fn insert_analysis(
    conn: &mut PgConnection,
    user_id: &str,
    draft: &AnalysisDraft,
    mode: AnalysisMode,
) -> Result<AnalysisRow, sqlx::Error> {
    let role = &draft.role_snapshot;

    sqlx::query_as(
        r#"
        INSERT INTO analyses
            (id, user_id, role_domain, role_level, role_title, core_skills, bonus_skills,
             readiness_score, readiness_status, matched_skills, missing_skills,
             resume_fit_score, score_breakdown, explanation, resume_text, analysis_mode)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(&role.domain)
    .bind(&role.role_level)
    .bind(&role.title)
    .bind(&role.core_skills)
    .bind(&role.bonus_skills)
    .bind(draft.readiness_score as i32)
    .bind(draft.readiness_status.as_str())
    .bind(&draft.matched_skills)
    .bind(&draft.missing_skills)
    .bind(draft.resume_fit_score as i32)
    .bind(Json(&draft.score_breakdown))
    .bind(draft.explanation.as_ref().map(Json))
    .bind(draft.resume_text.as_deref())
    .bind(mode.as_str())
    .fetch_one(conn)
    .await
}

/// Most recent first.
pub async fn list_analyses(pool: &PgPool, user_id: &str) -> Result<Vec<AnalysisRow>, sqlx::Error> {
    sqlx::query_as(
        "SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT $2",
    )
    .bind(user_id)
    .bind(HISTORY_LIMIT)
    .fetch_all(pool)
    .await
}

pub async fn latest_analysis(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<AnalysisRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM analyses WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Another user's analysis reads as absent.
pub async fn analysis_by_id(
    pool: &PgPool,
    user_id: &str,
    id: Uuid,
) -> Result<Option<AnalysisRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM analyses WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn insert_roadmap(
    conn: &mut PgConnection,
    user_id: &str,
    analysis_id: Uuid,
    weeks: &[WeekPlan],
) -> Result<RoadmapRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO roadmaps (id, user_id, analysis_id, weeks)
        VALUES ($1, $2, $3, $4)
        RETURNING *
        "#,
    )
    .bind(Uuid::new_v4())
    .bind(user_id)
    .bind(analysis_id)
    .bind(Json(weeks))
    .fetch_one(conn)
    .await
}

pub async fn roadmap_by_analysis(
    pool: &PgPool,
    user_id: &str,
    analysis_id: Uuid,
) -> Result<Option<RoadmapRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roadmaps WHERE analysis_id = $1 AND user_id = $2")
        .bind(analysis_id)
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn latest_roadmap(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<RoadmapRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM roadmaps WHERE user_id = $1 ORDER BY created_at DESC LIMIT 1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
