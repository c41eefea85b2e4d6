use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserProfileRow {
    pub user_id: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Declared skills plus the latest resume text. Replaced wholesale on each
/// onboarding submission.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSkillsRow {
    pub user_id: String,
    pub skills: Vec<String>,
    pub resume_text: Option<String>,
    pub updated_at: DateTime<Utc>,
}
