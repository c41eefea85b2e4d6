use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::auth::AuthUser;
use crate::errors::{optional_json, AppError};
use crate::models::analysis::AnalysisRecord;
use crate::models::roadmap::RoadmapRow;
use crate::onboarding::store as onboarding;
use crate::readiness::gaps::{compare_skills, learning_order, ComparisonRow, GapItem};
use crate::readiness::pipeline::{run_analysis, AnalysisContext, AnalysisMode};
use crate::readiness::store;
use crate::state::AppState;

#[derive(Debug, Default, Deserialize)]
pub struct AnalyzeBody {
    /// Overrides the stored resume text and replaces it.
    pub resume_text: Option<String>,
    #[serde(default)]
    pub experience_years: u32,
}

#[derive(Debug, Serialize)]
pub struct AnalyzeResult {
    pub mode: AnalysisMode,
    pub analysis: AnalysisRecord,
    pub roadmap: RoadmapRow,
}

/// POST /api/v1/analyses
pub async fn handle_create_analysis(
    State(state): State<AppState>,
    user: AuthUser,
    body: Result<Json<AnalyzeBody>, JsonRejection>,
) -> Result<Json<AnalyzeResult>, AppError> {
    let body = optional_json(body)?;

    let selection = onboarding::get_role_selection(&state.db, &user.user_id)
        .await?
        .ok_or_else(|| AppError::Validation("Select a job role before analysing".to_string()))?;
    let role = selection.requirement().map_err(AppError::Validation)?;

    let skills = onboarding::get_user_skills(&state.db, &user.user_id)
        .await?
        .filter(|row| !row.skills.is_empty())
        .ok_or_else(|| AppError::Validation("Add your skills before analysing".to_string()))?;

    let resume_text = match body.resume_text.as_deref().map(str::trim) {
        Some(text) if !text.is_empty() => {
            onboarding::save_resume_text(&state.db, &user.user_id, text).await?;
            Some(text.to_string())
        }
        _ => skills.resume_text.clone(),
    };

    let ctx = AnalysisContext {
        user_id: user.user_id.clone(),
        role,
        skills: skills.skills,
        resume_text,
        experience_years: body.experience_years,
    };
    let outcome = run_analysis(&ctx, state.inference.as_ref(), &state.resources).await;

    let mut tx = state.db.begin().await?;
    let analysis =
        store::insert_analysis(&mut tx, &user.user_id, &outcome.analysis, outcome.mode).await?;
    let roadmap = store::insert_roadmap(&mut tx, &user.user_id, analysis.id, &outcome.weeks).await?;
    tx.commit().await?;

    info!(
        user_id = %analysis.user_id,
        analysis_id = %analysis.id,
        mode = outcome.mode.as_str(),
        score = analysis.readiness_score,
        "Analysis stored"
    );

    Ok(Json(AnalyzeResult {
        mode: outcome.mode,
        analysis: analysis.into(),
        roadmap,
    }))
}

/// GET /api/v1/analyses
pub async fn handle_list_analyses(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<AnalysisRecord>>, AppError> {
    let rows = store::list_analyses(&state.db, &user.user_id).await?;
    Ok(Json(rows.into_iter().map(AnalysisRecord::from).collect()))
}

/// GET /api/v1/analyses/latest
pub async fn handle_latest_analysis(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<AnalysisRecord>, AppError> {
    store::latest_analysis(&state.db, &user.user_id)
        .await?
        .map(|row| Json(row.into()))
        .ok_or_else(|| AppError::NotFound("No analysis yet".to_string()))
}

/// GET /api/v1/analyses/:id
pub async fn handle_get_analysis(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<AnalysisRecord>, AppError> {
    store::analysis_by_id(&state.db, &user.user_id, id)
        .await?
        .map(|row| Json(row.into()))
        .ok_or_else(|| AppError::NotFound(format!("Analysis {id} not found")))
}

/// GET /api/v1/analyses/:id/roadmap
pub async fn handle_get_analysis_roadmap(
    State(state): State<AppState>,
    user: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<RoadmapRow>, AppError> {
    store::roadmap_by_analysis(&state.db, &user.user_id, id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("Roadmap for analysis {id} not found")))
}

/// GET /api/v1/roadmaps/latest
pub async fn handle_latest_roadmap(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<RoadmapRow>, AppError> {
    store::latest_roadmap(&state.db, &user.user_id)
        .await?
        .map(Json)
        .ok_or_else(|| AppError::NotFound("No roadmap yet".to_string()))
}

#[derive(Debug, Serialize)]
pub struct GapsResponse {
    pub analysis_id: Uuid,
    pub gaps: Vec<GapItem>,
}

/// GET /api/v1/gaps
/// Ordered against the role captured in the latest analysis, not the current
/// selection.
pub async fn handle_get_gaps(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<GapsResponse>, AppError> {
    let analysis = store::latest_analysis(&state.db, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No analysis yet".to_string()))?;
    let user_skills = onboarding::get_user_skills(&state.db, &user.user_id)
        .await?
        .map(|row| row.skills)
        .unwrap_or_default();

    let gaps = learning_order(&analysis.missing_skills, &user_skills, &analysis.core_skills);
    Ok(Json(GapsResponse {
        analysis_id: analysis.id,
        gaps,
    }))
}

/// GET /api/v1/comparison
pub async fn handle_get_comparison(
    State(state): State<AppState>,
    user: AuthUser,
) -> Result<Json<Vec<ComparisonRow>>, AppError> {
    let selection = onboarding::get_role_selection(&state.db, &user.user_id)
        .await?
        .ok_or_else(|| AppError::NotFound("No role selected".to_string()))?;
    let user_skills = onboarding::get_user_skills(&state.db, &user.user_id)
        .await?
        .map(|row| row.skills)
        .unwrap_or_default();

    Ok(Json(compare_skills(
        &user_skills,
        &selection.core_skills,
        &selection.bonus_skills,
    )))
}
