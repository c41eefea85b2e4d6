//! Maps a successful inference response onto the local analysis model.
//!
//! The remote service scores three tiers (core / secondary / bonus). That
//! structure is kept in the breakdown and explanation here; the local path
//! only ever produces core and bonus.

use crate::inference::types::{AnalyzeResponse, PriorityTier};
use crate::models::analysis::RoleSnapshot;
use crate::models::roadmap::WeekPlan;
use crate::readiness::breakdown::{per_skill_impact, BreakdownEntry, ImpactStatus};
use crate::readiness::pipeline::{AnalysisContext, AnalysisDraft, Explanation};
use crate::readiness::resources::ResourceCatalog;
use crate::readiness::roadmap::{derive_roadmap, enrich_weeks, weeks_from_remote, ROADMAP_WEEKS};
use crate::readiness::scorer::ReadinessStatus;

pub fn analysis_from_remote(ctx: &AnalysisContext, response: &AnalyzeResponse) -> AnalysisDraft {
    let readiness_score = fraction_to_percent(response.readiness_score);

    AnalysisDraft {
        role_snapshot: RoleSnapshot {
            domain: ctx.role.domain.clone(),
            role_level: ctx.role.level.as_str().to_string(),
            title: response
                .role_title
                .clone()
                .filter(|t| !t.is_empty())
                .unwrap_or_else(|| format!("{} {}", ctx.role.level, ctx.role.domain)),
            core_skills: ctx.role.core_skills.clone(),
            bonus_skills: ctx.role.bonus_skills.clone(),
        },
        readiness_score,
        readiness_status: ReadinessStatus::from_label(&response.readiness_label),
        matched_skills: response.skill_analysis.matched_skills.clone(),
        missing_skills: response.missing_skills.iter().map(|g| g.skill.clone()).collect(),
        resume_fit_score: fraction_to_percent(response.skill_analysis.match_percentage),
        score_breakdown: tiered_breakdown(response),
        explanation: Some(Explanation {
            factors: response.explanation.factors.clone(),
            core_coverage: response.explanation.core_coverage * 100.0,
            secondary_coverage: response.explanation.secondary_coverage * 100.0,
            bonus_coverage: response.explanation.bonus_coverage * 100.0,
            experience_factor: response.explanation.experience_factor * 100.0,
        }),
        resume_text: ctx.resume_text.clone(),
    }
}

/// Remote roadmap enriched with the response's own recommendations. A
/// skeleton that is not exactly four weeks long is replaced by the local
/// partition of the remote missing-skill list.
pub fn roadmap_from_remote(response: &AnalyzeResponse) -> Vec<WeekPlan> {
    let recommendations = ResourceCatalog::from_recommendations(&response.recommendations);

    if response.roadmap.len() == ROADMAP_WEEKS {
        enrich_weeks(weeks_from_remote(&response.roadmap), &recommendations)
    } else {
        let missing: Vec<String> = response.missing_skills.iter().map(|g| g.skill.clone()).collect();
        derive_roadmap(&missing, &recommendations)
    }
}

/// Three-tier breakdown: matched skills share their tier's budget over all
/// skills of that tier, missing skills share it over the missing ones only.
pub fn tiered_breakdown(response: &AnalyzeResponse) -> Vec<BreakdownEntry> {
    let analysis = &response.skill_analysis;
    let missing_in = |tier: PriorityTier| {
        response
            .missing_skills
            .iter()
            .filter(|g| g.priority == tier)
            .count()
    };

    let matched_tiers = [
        (PriorityTier::Core, &analysis.matched_core),
        (PriorityTier::Secondary, &analysis.matched_secondary),
        (PriorityTier::Bonus, &analysis.matched_bonus),
    ];

    let mut entries = Vec::new();
    for (tier, matched) in matched_tiers {
        let impact = per_skill_impact(tier.budget(), matched.len() + missing_in(tier));
        entries.extend(matched.iter().map(|skill| BreakdownEntry {
            skill: skill.clone(),
            impact,
            status: ImpactStatus::Matched,
        }));
    }

    for gap in &response.missing_skills {
        entries.push(BreakdownEntry {
            skill: gap.skill.clone(),
            impact: -per_skill_impact(gap.priority.budget(), missing_in(gap.priority)),
            status: ImpactStatus::Missing,
        });
    }

    entries
}

fn fraction_to_percent(fraction: f64) -> u32 {
    (fraction * 100.0).round().clamp(0.0, 100.0) as u32
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::inference::types::{
        LearningResource, RemoteExplanation, RemoteRoadmapWeek, ResourceKind, SkillAnalysis,
        SkillGap, SkillRecommendation,
    };
    use crate::models::role::{RoleLevel, RoleRequirement};

    fn gap(skill: &str, priority: PriorityTier) -> SkillGap {
        SkillGap {
            skill: skill.to_string(),
            priority,
            weight: match priority {
                PriorityTier::Core => 1.0,
                PriorityTier::Secondary => 0.6,
                PriorityTier::Bonus => 0.3,
            },
            rank: 1,
        }
    }

    pub(crate) fn sample_response() -> AnalyzeResponse {
        AnalyzeResponse {
            readiness_label: "Almost Ready".to_string(),
            readiness_score: 0.66,
            role_title: Some("Junior Frontend Developer".to_string()),
            role_level: Some("junior".to_string()),
            skill_analysis: SkillAnalysis {
                matched_skills: vec!["HTML".into(), "CSS".into(), "Git".into(), "Jest".into()],
                matched_core: vec!["HTML".into(), "CSS".into(), "Git".into()],
                matched_secondary: vec!["Jest".into()],
                matched_bonus: vec![],
                missing_skills: vec![],
                match_percentage: 0.5,
                weighted_score: 0.66,
            },
            explanation: RemoteExplanation {
                core_coverage: 0.75,
                secondary_coverage: 0.5,
                bonus_coverage: 0.0,
                experience_factor: 0.2,
                factors: vec!["Strong HTML/CSS foundation".to_string()],
            },
            missing_skills: vec![
                gap("React", PriorityTier::Core),
                gap("TypeScript", PriorityTier::Secondary),
                gap("Next.js", PriorityTier::Bonus),
            ],
            recommendations: vec![SkillRecommendation {
                skill: "react".to_string(),
                resources: vec![LearningResource {
                    kind: ResourceKind::Course,
                    title: "React Fundamentals".to_string(),
                    provider: Some("Frontend Masters".to_string()),
                    channel: None,
                    url: "https://example.com/react".to_string(),
                    difficulty: "beginner".to_string(),
                    duration_hours: Some(6.0),
                }],
            }],
            roadmap: (1..=4)
                .map(|week| RemoteRoadmapWeek {
                    week,
                    skills: vec![],
                    estimated_hours: 8.0,
                    focus: if week == 1 { "React".to_string() } else { format!("Week {week}") },
                })
                .collect(),
            extracted_skills: None,
        }
    }

    pub(crate) fn sample_context() -> AnalysisContext {
        AnalysisContext {
            user_id: "user_123".to_string(),
            role: RoleRequirement {
                domain: "frontend".to_string(),
                level: RoleLevel::Junior,
                core_skills: vec!["HTML".into(), "CSS".into(), "Git".into(), "React".into()],
                bonus_skills: vec!["Next.js".into()],
            },
            skills: vec!["HTML".into(), "CSS".into(), "Git".into(), "Jest".into()],
            resume_text: Some("Built static sites".to_string()),
            experience_years: 1,
        }
    }

    #[test]
    fn test_remote_scores_are_percentages() {
        let draft = analysis_from_remote(&sample_context(), &sample_response());
        assert_eq!(draft.readiness_score, 66);
        assert_eq!(draft.readiness_status, ReadinessStatus::Almost);
        assert_eq!(draft.resume_fit_score, 50);
        assert_eq!(draft.role_snapshot.title, "Junior Frontend Developer");
        assert_eq!(draft.missing_skills, vec!["React", "TypeScript", "Next.js"]);

        let explanation = draft.explanation.unwrap();
        assert_eq!(explanation.core_coverage, 75.0);
        assert_eq!(explanation.secondary_coverage, 50.0);
    }

    #[test]
    fn test_missing_title_falls_back_to_level_and_domain() {
        let mut response = sample_response();
        response.role_title = None;
        let draft = analysis_from_remote(&sample_context(), &response);
        assert_eq!(draft.role_snapshot.title, "junior frontend");
    }

    #[test]
    fn test_tiered_breakdown_keeps_secondary_tier() {
        let breakdown = tiered_breakdown(&sample_response());

        // core: 3 matched + 1 missing → 80/4 = 20 each
        assert_eq!(breakdown[0].skill, "HTML");
        assert_eq!(breakdown[0].impact, 20);
        // secondary: 1 matched + 1 missing → 15/2 = 7.5 → 8
        let jest = breakdown.iter().find(|b| b.skill == "Jest").unwrap();
        assert_eq!(jest.impact, 8);
        // missing skills share the budget over missing-only counts
        let react = breakdown.iter().find(|b| b.skill == "React").unwrap();
        assert_eq!(react.impact, -80);
        let ts = breakdown.iter().find(|b| b.skill == "TypeScript").unwrap();
        assert_eq!(ts.impact, -15);
        let next = breakdown.iter().find(|b| b.skill == "Next.js").unwrap();
        assert_eq!(next.impact, -5);
    }

    #[test]
    fn test_remote_roadmap_enriched_from_recommendations() {
        let weeks = roadmap_from_remote(&sample_response());
        assert_eq!(weeks.len(), 4);
        assert_eq!(weeks[0].courses[0].platform, "Frontend Masters");
        assert!(weeks[1].courses.is_empty());
    }

    #[test]
    fn test_short_remote_roadmap_is_repartitioned() {
        let mut response = sample_response();
        response.roadmap.truncate(2);
        let weeks = roadmap_from_remote(&response);
        assert_eq!(weeks.len(), 4);
        let focus: Vec<&str> = weeks.iter().map(|w| w.focus_skill.as_str()).collect();
        assert_eq!(focus, vec!["React", "TypeScript", "Next.js", "Review & Practice"]);
        assert_eq!(weeks[0].courses.len(), 1);
    }
}
