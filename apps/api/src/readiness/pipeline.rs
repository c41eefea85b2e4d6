//! Analysis pipeline: one sequential pass per request.
//!
//! Flow: build inference request → remote attempt → on any failure, local
//! scorer + breakdown + roadmap. Nothing here touches the database; the
//! handler persists the returned outcome.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::inference::types::AnalyzeRequest;
use crate::inference::{role_id_for_domain, ReadinessInference};
use crate::models::analysis::RoleSnapshot;
use crate::models::roadmap::WeekPlan;
use crate::models::role::{RoleLevel, RoleRequirement};
use crate::readiness::breakdown::{build_breakdown, BreakdownEntry};
use crate::readiness::remote::{analysis_from_remote, roadmap_from_remote};
use crate::readiness::resources::ResourceCatalog;
use crate::readiness::roadmap::derive_roadmap;
use crate::readiness::scorer::{compute_readiness, compute_resume_fit, ReadinessStatus};

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Everything one analysis needs, passed explicitly rather than read from
/// shared state.
#[derive(Debug, Clone)]
pub struct AnalysisContext {
    pub user_id: String,
    pub role: RoleRequirement,
    pub skills: Vec<String>,
    pub resume_text: Option<String>,
    pub experience_years: u32,
}

impl AnalysisContext {
    pub fn inference_request(&self) -> AnalyzeRequest {
        AnalyzeRequest {
            candidate_id: Some(self.user_id.clone()),
            skills: self.skills.clone(),
            resume_text: self.resume_text.clone().filter(|t| !t.trim().is_empty()),
            role_id: role_id_for_domain(&self.role.domain),
            level: self.role.level,
            experience_years: self.experience_years,
        }
    }
}

/// Coverage percentages (0–100) and free-text factors. Only the remote
/// path produces one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub factors: Vec<String>,
    pub core_coverage: f64,
    pub secondary_coverage: f64,
    pub bonus_coverage: f64,
    pub experience_factor: f64,
}

/// An analysis ready for append-only persistence.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisDraft {
    pub role_snapshot: RoleSnapshot,
    pub readiness_score: u32,
    pub readiness_status: ReadinessStatus,
    pub matched_skills: Vec<String>,
    pub missing_skills: Vec<String>,
    pub resume_fit_score: u32,
    pub score_breakdown: Vec<BreakdownEntry>,
    pub explanation: Option<Explanation>,
    pub resume_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AnalysisMode {
    Remote,
    Fallback,
}

impl AnalysisMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnalysisMode::Remote => "remote",
            AnalysisMode::Fallback => "fallback",
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub mode: AnalysisMode,
    pub analysis: AnalysisDraft,
    pub weeks: Vec<WeekPlan>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs one analysis. Never fails: remote unavailability engages the local
/// fallback, reported through `AnalysisOutcome::mode`.
pub async fn run_analysis(
    ctx: &AnalysisContext,
    inference: &dyn ReadinessInference,
    resources: &ResourceCatalog,
) -> AnalysisOutcome {
    let request = ctx.inference_request();

    match inference.analyze(&request).await {
        Ok(response) => {
            info!(
                "Remote analysis for user {}: {} ({:.2})",
                ctx.user_id, response.readiness_label, response.readiness_score
            );
            AnalysisOutcome {
                mode: AnalysisMode::Remote,
                analysis: analysis_from_remote(ctx, &response),
                weeks: roadmap_from_remote(&response),
            }
        }
        Err(e) => {
            warn!(
                "Remote analysis unavailable for user {}, using local fallback: {e}",
                ctx.user_id
            );
            local_analysis(ctx, resources)
        }
    }
}

/// The deterministic local computation.
pub fn local_analysis(ctx: &AnalysisContext, resources: &ResourceCatalog) -> AnalysisOutcome {
    let role = &ctx.role;
    let result = compute_readiness(&ctx.skills, &role.core_skills, &role.bonus_skills);
    let matched = result.matched_skills();
    let missing = result.missing_skills();

    let resume_fit_score = compute_resume_fit(
        matched.len(),
        role.core_skills.len() + role.bonus_skills.len(),
    );
    let score_breakdown = build_breakdown(&result, role.core_skills.len(), role.bonus_skills.len());
    let weeks = derive_roadmap(&missing, resources);

    info!(
        "Local analysis for user {}: score={} matched={} missing={}",
        ctx.user_id,
        result.score,
        matched.len(),
        missing.len()
    );

    AnalysisOutcome {
        mode: AnalysisMode::Fallback,
        analysis: AnalysisDraft {
            role_snapshot: RoleSnapshot {
                domain: role.domain.clone(),
                role_level: role.level.as_str().to_string(),
                title: local_role_title(role.level, &role.domain),
                core_skills: role.core_skills.clone(),
                bonus_skills: role.bonus_skills.clone(),
            },
            readiness_score: result.score,
            readiness_status: ReadinessStatus::from_score(result.score),
            matched_skills: matched,
            missing_skills: missing,
            resume_fit_score,
            score_breakdown,
            explanation: None,
            resume_text: ctx.resume_text.clone(),
        },
        weeks,
    }
}

/// "Junior frontend", "Senior full stack": capitalized level then domain
/// with hyphens as spaces.
pub fn local_role_title(level: RoleLevel, domain: &str) -> String {
    let level = level.as_str();
    let mut chars = level.chars();
    let capitalized = match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    };
    format!("{capitalized} {}", domain.replace('-', " "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::types::AnalyzeResponse;
    use crate::inference::InferenceError;
    use crate::readiness::breakdown::ImpactStatus;
    use crate::readiness::remote::tests::{sample_context, sample_response};
    use crate::readiness::roadmap::REVIEW_PLACEHOLDER;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct FailingInference {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl ReadinessInference for FailingInference {
        async fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalyzeResponse, InferenceError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Err(InferenceError::Status {
                status: 503,
                message: "Service Unavailable".to_string(),
            })
        }
    }

    struct FixedInference(AnalyzeResponse);

    #[async_trait]
    impl ReadinessInference for FixedInference {
        async fn analyze(&self, _request: &AnalyzeRequest) -> Result<AnalyzeResponse, InferenceError> {
            Ok(self.0.clone())
        }
    }

    fn intern_context(skills: &[&str]) -> AnalysisContext {
        AnalysisContext {
            user_id: "user_1".to_string(),
            role: RoleRequirement {
                domain: "frontend".to_string(),
                level: RoleLevel::Intern,
                core_skills: vec!["HTML".into(), "CSS".into(), "JavaScript".into(), "Git".into()],
                bonus_skills: vec!["React Basics".into()],
            },
            skills: skills.iter().map(|s| s.to_string()).collect(),
            resume_text: None,
            experience_years: 0,
        }
    }

    #[tokio::test]
    async fn test_failure_engages_fallback_once() {
        let inference = FailingInference {
            calls: AtomicUsize::new(0),
        };
        let ctx = intern_context(&["HTML", "CSS"]);
        let outcome = run_analysis(&ctx, &inference, &ResourceCatalog::builtin()).await;

        assert_eq!(inference.calls.load(Ordering::SeqCst), 1);
        assert_eq!(outcome.mode, AnalysisMode::Fallback);
        assert_eq!(outcome.analysis.readiness_score, 40);
        assert_eq!(outcome.analysis.readiness_status, ReadinessStatus::NeedsUpskilling);
        assert_eq!(outcome.analysis.matched_skills, vec!["HTML", "CSS"]);
        assert_eq!(
            outcome.analysis.missing_skills,
            vec!["JavaScript", "Git", "React Basics"]
        );
        assert_eq!(outcome.analysis.resume_fit_score, 40);
        assert!(outcome.analysis.explanation.is_none());
        assert_eq!(outcome.weeks.len(), 4);
    }

    #[tokio::test]
    async fn test_fallback_has_no_secondary_tier() {
        let inference = FailingInference {
            calls: AtomicUsize::new(0),
        };
        let outcome = run_analysis(&intern_context(&[]), &inference, &ResourceCatalog::new()).await;

        // Every entry is a core (±20) or bonus (±20 for a single bonus skill) impact.
        for entry in &outcome.analysis.score_breakdown {
            assert_eq!(entry.status, ImpactStatus::Missing);
            assert_eq!(entry.impact, -20);
        }
        assert_eq!(outcome.analysis.score_breakdown.len(), 5);
    }

    #[tokio::test]
    async fn test_remote_success_is_used_as_is() {
        let inference = FixedInference(sample_response());
        let outcome = run_analysis(&sample_context(), &inference, &ResourceCatalog::new()).await;

        assert_eq!(outcome.mode, AnalysisMode::Remote);
        assert_eq!(outcome.analysis.readiness_score, 66);
        assert!(outcome.analysis.explanation.is_some());
        assert!(outcome
            .analysis
            .score_breakdown
            .iter()
            .any(|b| b.skill == "TypeScript" && b.impact == -15));
    }

    #[test]
    fn test_local_analysis_with_full_coverage() {
        let ctx = intern_context(&["html", "css", "javascript", "git", "react basics"]);
        let outcome = local_analysis(&ctx, &ResourceCatalog::builtin());

        assert_eq!(outcome.analysis.readiness_score, 100);
        assert_eq!(outcome.analysis.readiness_status, ReadinessStatus::Ready);
        assert!(outcome
            .weeks
            .iter()
            .all(|w| w.focus_skill == REVIEW_PLACEHOLDER));
    }

    #[test]
    fn test_inference_request_shape() {
        let mut ctx = intern_context(&["HTML"]);
        ctx.resume_text = Some("   ".to_string());
        let request = ctx.inference_request();
        assert_eq!(request.role_id, "frontend_developer");
        assert_eq!(request.level, RoleLevel::Intern);
        assert_eq!(request.candidate_id.as_deref(), Some("user_1"));
        assert!(request.resume_text.is_none());
    }

    #[test]
    fn test_local_role_title() {
        assert_eq!(local_role_title(RoleLevel::Junior, "frontend"), "Junior frontend");
        assert_eq!(local_role_title(RoleLevel::Mid, "full-stack"), "Mid full stack");
    }
}
