use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

use crate::readiness::breakdown::BreakdownEntry;
use crate::readiness::pipeline::Explanation;

/// The role as it was when the analysis ran.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleSnapshot {
    pub domain: String,
    pub role_level: String,
    pub title: String,
    pub core_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
}

#[derive(Debug, Clone, FromRow)]
pub struct AnalysisRow {
    pub id: Uuid,
    pub user_id: String,
    pub role_domain: String,
    pub role_level: String,
    pub role_title: String,
    pub core_skills: Vec<String>,
    pub bonus_skills: Vec<String>,
    pub readiness_score: i32,
    pub readiness_status: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_fit_score: i32,
    pub score_breakdown: Json<Vec<BreakdownEntry>>,
    pub explanation: Option<Json<Explanation>>,
    pub resume_text: Option<String>,
    pub analysis_mode: String,
    pub created_at: DateTime<Utc>,
}

/// API shape of a stored analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisRecord {
    pub id: Uuid,
    pub role_snapshot: RoleSnapshot,
    pub readiness_score: i32,
    pub readiness_status: String,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_fit_score: i32,
    pub score_breakdown: Vec<BreakdownEntry>,
    pub explanation: Option<Explanation>,
    pub resume_text: Option<String>,
    pub analysis_mode: String,
    pub created_at: DateTime<Utc>,
}

impl From<AnalysisRow> for AnalysisRecord {
    fn from(row: AnalysisRow) -> Self {
        AnalysisRecord {
            id: row.id,
            role_snapshot: RoleSnapshot {
                domain: row.role_domain,
                role_level: row.role_level,
                title: row.role_title,
                core_skills: row.core_skills,
                bonus_skills: row.bonus_skills,
            },
            readiness_score: row.readiness_score,
            readiness_status: row.readiness_status,
            matched_skills: row.matched_skills,
            missing_skills: row.missing_skills,
            resume_fit_score: row.resume_fit_score,
            score_breakdown: row.score_breakdown.0,
            explanation: row.explanation.map(|e| e.0),
            resume_text: row.resume_text,
            analysis_mode: row.analysis_mode,
            created_at: row.created_at,
        }
    }
}
