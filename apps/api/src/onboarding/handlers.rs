use axum::{
    extract::{rejection::JsonRejection, Multipart, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::auth::AuthUser;
use crate::catalog::roles::catalog_requirement;
use crate::errors::{optional_json, AppError};
use crate::models::role::{EmploymentType, JobRoleSelectionRow, RoleLevel};
use crate::models::user::{UserProfileRow, UserSkillsRow};
use crate::onboarding::resume::{extract_resume_text_blocking, ExtractError};
use crate::onboarding::store::{self, RoleSelectionParams};
use crate::state::AppState;

pub const RESUME_FIELD: &str = "resume";

#[derive(Debug, Default, Deserialize)]
pub struct ProfileRequest {
    pub email: Option<String>,
}

/// POST /api/v1/profile
/// Idempotent: a second call returns the row created by the first.
pub async fn handle_store_profile(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<ProfileRequest>, JsonRejection>,
) -> Result<Json<UserProfileRow>, AppError> {
    let email = optional_json(body)?
        .email
        .or(user.email)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| AppError::Validation("email is required".to_string()))?;

    let profile = store::ensure_profile(&state.db, &user.user_id, &email).await?;
    Ok(Json(profile))
}

/// GET /api/v1/profile
pub async fn handle_get_profile(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserProfileRow>, AppError> {
    store::get_profile(&state.db, &user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Profile not found".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct RoleSelectionRequest {
    pub domain: String,
    pub role_level: String,
    pub experience_range: String,
    pub employment_type: EmploymentType,
    #[serde(default)]
    pub responsibilities: Vec<String>,
    /// Omitted lists are filled from the role catalogue.
    pub core_skills: Option<Vec<String>>,
    pub bonus_skills: Option<Vec<String>>,
}

/// PUT /api/v1/onboarding/role
pub async fn handle_save_role(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<RoleSelectionRequest>,
) -> Result<Json<JobRoleSelectionRow>, AppError> {
    let domain = req.domain.trim();
    if domain.is_empty() {
        return Err(AppError::Validation("domain is required".to_string()));
    }
    let level: RoleLevel = req.role_level.parse().map_err(AppError::Validation)?;

    let (core_skills, bonus_skills) = match (req.core_skills, req.bonus_skills) {
        (Some(core), Some(bonus)) => (core, bonus),
        (core, bonus) => {
            let defaults = catalog_requirement(domain, level).ok_or_else(|| {
                AppError::Validation(format!(
                    "unknown domain '{domain}': core_skills and bonus_skills must be given"
                ))
            })?;
            (
                core.unwrap_or(defaults.core_skills),
                bonus.unwrap_or(defaults.bonus_skills),
            )
        }
    };

    let row = store::save_role_selection(
        &state.db,
        &user.user_id,
        RoleSelectionParams {
            domain,
            role_level: level.as_str(),
            experience_range: req.experience_range.trim(),
            employment_type: req.employment_type.as_str(),
            responsibilities: &req.responsibilities,
            core_skills: &core_skills,
            bonus_skills: &bonus_skills,
        },
    )
    .await?;

    info!(
        user_id = %user.user_id,
        domain = %row.domain,
        level = %row.role_level,
        core = row.core_skills.len(),
        bonus = row.bonus_skills.len(),
        "Role selection saved"
    );
    Ok(Json(row))
}

/// GET /api/v1/onboarding/role
pub async fn handle_get_role(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<JobRoleSelectionRow>, AppError> {
    store::get_role_selection(&state.db, &user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No role selected".to_string()))
}

#[derive(Debug, Deserialize)]
pub struct UserSkillsRequest {
    pub skills: Vec<String>,
    pub resume_text: Option<String>,
}

/// PUT /api/v1/onboarding/skills
pub async fn handle_save_skills(
    State(state): State<AppState>,
    user: AuthUser,
    Json(req): Json<UserSkillsRequest>,
) -> Result<Json<UserSkillsRow>, AppError> {
    let skills = clean_skill_list(req.skills);
    if skills.is_empty() {
        return Err(AppError::Validation(
            "at least one skill is required".to_string(),
        ));
    }

    let resume_text = req
        .resume_text
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty());
    let row = store::save_user_skills(&state.db, &user.user_id, &skills, resume_text).await?;
    Ok(Json(row))
}

/// GET /api/v1/onboarding/skills
pub async fn handle_get_skills(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<UserSkillsRow>, AppError> {
    store::get_user_skills(&state.db, &user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No skills saved".to_string()))
}

#[derive(Debug, Serialize)]
pub struct ResumeUploadResponse {
    pub file_name: Option<String>,
    pub characters: usize,
    pub resume_text: String,
}

/// POST /api/v1/onboarding/resume
/// Multipart upload; the file goes in the `resume` field.
pub async fn handle_upload_resume(
    State(state): State<AppState>,
    user: AuthUser,
    mut multipart: Multipart,
) -> Result<Json<ResumeUploadResponse>, AppError> {
    while let Some(field) = multipart.next_field().await? {
        if field.name() != Some(RESUME_FIELD) {
            continue;
        }
        let file_name = field.file_name().map(str::to_string);
        let content_type = field.content_type().map(str::to_string);
        let bytes = field.bytes().await?;
        let size = bytes.len();

        let text = extract_resume_text_blocking(
            file_name.clone(),
            content_type,
            bytes,
            state.config.max_resume_bytes,
        )
        .await
        .map_err(extract_error)?;

        store::save_resume_text(&state.db, &user.user_id, &text).await?;
        info!(
            user_id = %user.user_id,
            bytes = size,
            characters = text.chars().count(),
            "Resume text extracted"
        );

        return Ok(Json(ResumeUploadResponse {
            file_name,
            characters: text.chars().count(),
            resume_text: text,
        }));
    }

    Err(AppError::Validation(format!(
        "multipart field '{RESUME_FIELD}' is required"
    )))
}

fn extract_error(e: ExtractError) -> AppError {
    AppError::Validation(e.to_string())
}

/// Trims entries and drops blanks and case-insensitive repeats, keeping the
/// first spelling seen.
pub fn clean_skill_list(skills: Vec<String>) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    skills
        .into_iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .filter(|s| seen.insert(s.to_lowercase()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_skill_list() {
        let cleaned = clean_skill_list(vec![
            " React ".into(),
            "".into(),
            "react".into(),
            "TypeScript".into(),
            "   ".into(),
        ]);
        assert_eq!(cleaned, vec!["React".to_string(), "TypeScript".to_string()]);
    }

    #[test]
    fn test_role_request_lists_are_optional() {
        let req: RoleSelectionRequest = serde_json::from_value(serde_json::json!({
            "domain": "frontend",
            "role_level": "junior",
            "experience_range": "0-1",
            "employment_type": "full-time"
        }))
        .unwrap();
        assert!(req.core_skills.is_none());
        assert!(req.responsibilities.is_empty());
        assert_eq!(req.employment_type, EmploymentType::FullTime);
    }
}
