//! Onboarding persistence. Profiles are created once; role selections and
//! skill sets are one row per user, replaced in place on every save.

use sqlx::PgPool;

use crate::models::role::JobRoleSelectionRow;
use crate::models::user::{UserProfileRow, UserSkillsRow};

/// Field set for a role selection save.
pub struct RoleSelectionParams<'a> {
    pub domain: &'a str,
    pub role_level: &'a str,
    pub experience_range: &'a str,
    pub employment_type: &'a str,
    pub responsibilities: &'a [String],
    pub core_skills: &'a [String],
    pub bonus_skills: &'a [String],
}

/// Inserts the profile on first sight and returns the stored row either way.
pub async fn ensure_profile(
    pool: &PgPool,
    user_id: &str,
    email: &str,
) -> Result<UserProfileRow, sqlx::Error> {
    sqlx::query(
        "INSERT INTO user_profiles (user_id, email) VALUES ($1, $2) ON CONFLICT (user_id) DO NOTHING",
    )
    .bind(user_id)
    .bind(email)
    .execute(pool)
    .await?;

    sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_one(pool)
        .await
}

pub async fn get_profile(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<UserProfileRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_profiles WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

pub async fn save_role_selection(
    pool: &PgPool,
    user_id: &str,
    params: RoleSelectionParams<'_>,
) -> Result<JobRoleSelectionRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO job_role_selections
            (user_id, domain, role_level, experience_range, employment_type,
             responsibilities, core_skills, bonus_skills, updated_at)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            domain = EXCLUDED.domain,
            role_level = EXCLUDED.role_level,
            experience_range = EXCLUDED.experience_range,
            employment_type = EXCLUDED.employment_type,
            responsibilities = EXCLUDED.responsibilities,
            core_skills = EXCLUDED.core_skills,
            bonus_skills = EXCLUDED.bonus_skills,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(params.domain)
    .bind(params.role_level)
    .bind(params.experience_range)
    .bind(params.employment_type)
    .bind(params.responsibilities)
    .bind(params.core_skills)
    .bind(params.bonus_skills)
    .fetch_one(pool)
    .await
}

pub async fn get_role_selection(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<JobRoleSelectionRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM job_role_selections WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}

/// Replaces both the skill list and the resume text.
pub async fn save_user_skills(
    pool: &PgPool,
    user_id: &str,
    skills: &[String],
    resume_text: Option<&str>,
) -> Result<UserSkillsRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO user_skills (user_id, skills, resume_text, updated_at)
        VALUES ($1, $2, $3, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            skills = EXCLUDED.skills,
            resume_text = EXCLUDED.resume_text,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(skills)
    .bind(resume_text)
    .fetch_one(pool)
    .await
}

/// Sets only the resume text; an existing skill list is kept, a new row
/// starts with no skills.
pub async fn save_resume_text(
    pool: &PgPool,
    user_id: &str,
    resume_text: &str,
) -> Result<UserSkillsRow, sqlx::Error> {
    sqlx::query_as(
        r#"
        INSERT INTO user_skills (user_id, skills, resume_text, updated_at)
        VALUES ($1, '{}', $2, NOW())
        ON CONFLICT (user_id) DO UPDATE SET
            resume_text = EXCLUDED.resume_text,
            updated_at = NOW()
        RETURNING *
        "#,
    )
    .bind(user_id)
    .bind(resume_text)
    .fetch_one(pool)
    .await
}

pub async fn get_user_skills(
    pool: &PgPool,
    user_id: &str,
) -> Result<Option<UserSkillsRow>, sqlx::Error> {
    sqlx::query_as("SELECT * FROM user_skills WHERE user_id = $1")
        .bind(user_id)
        .fetch_optional(pool)
        .await
}
