//! Wire types for the inference service's `/inference/analyze` endpoint.

use serde::{Deserialize, Serialize};

use crate::models::role::RoleLevel;

#[derive(Debug, Clone, Serialize)]
pub struct AnalyzeRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_id: Option<String>,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_text: Option<String>,
    pub role_id: String,
    pub level: RoleLevel,
    pub experience_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriorityTier {
    Core,
    Secondary,
    Bonus,
}

impl PriorityTier {
    /// Points this tier contributes to the remote breakdown.
    pub fn budget(&self) -> f64 {
        match self {
            PriorityTier::Core => 80.0,
            PriorityTier::Secondary => 15.0,
            PriorityTier::Bonus => 5.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGap {
    pub skill: String,
    pub priority: PriorityTier,
    pub weight: f64, // 1.0, 0.6, 0.3
    pub rank: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResourceKind {
    Course,
    Youtube,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    #[serde(rename = "type")]
    pub kind: ResourceKind,
    pub title: String,
    #[serde(default)]
    pub provider: Option<String>,
    #[serde(default)]
    pub channel: Option<String>,
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub difficulty: String,
    #[serde(default)]
    pub duration_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillRecommendation {
    pub skill: String,
    pub resources: Vec<LearningResource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteRoadmapWeek {
    pub week: u32,
    pub skills: Vec<String>,
    pub estimated_hours: f64,
    pub focus: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillAnalysis {
    pub matched_skills: Vec<String>,
    pub matched_core: Vec<String>,
    pub matched_secondary: Vec<String>,
    pub matched_bonus: Vec<String>,
    pub missing_skills: Vec<SkillGap>,
    pub match_percentage: f64,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RemoteExplanation {
    pub core_coverage: f64,
    pub secondary_coverage: f64,
    pub bonus_coverage: f64,
    pub experience_factor: f64,
    pub factors: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub readiness_label: String,
    pub readiness_score: f64, // 0.0 – 1.0
    #[serde(default)]
    pub role_title: Option<String>,
    #[serde(default)]
    pub role_level: Option<String>,
    pub skill_analysis: SkillAnalysis,
    pub explanation: RemoteExplanation,
    pub missing_skills: Vec<SkillGap>,
    pub recommendations: Vec<SkillRecommendation>,
    pub roadmap: Vec<RemoteRoadmapWeek>,
    #[serde(default)]
    pub extracted_skills: Option<Vec<String>>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_omits_absent_optionals() {
        let request = AnalyzeRequest {
            candidate_id: None,
            skills: vec!["Rust".to_string()],
            resume_text: None,
            role_id: "backend_developer".to_string(),
            level: RoleLevel::Junior,
            experience_years: 0,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(
            value,
            json!({
                "skills": ["Rust"],
                "role_id": "backend_developer",
                "level": "junior",
                "experience_years": 0
            })
        );
    }

    #[test]
    fn test_resource_type_field_is_renamed() {
        let resource: LearningResource = serde_json::from_value(json!({
            "type": "youtube",
            "title": "Docker in 1 hour",
            "channel": "TechWorld with Nana",
            "url": "https://youtube.com/x",
            "difficulty": "beginner",
            "duration_hours": 1.0
        }))
        .unwrap();
        assert_eq!(resource.kind, ResourceKind::Youtube);
        assert_eq!(resource.provider, None);
    }

    #[test]
    fn test_tier_budgets_sum_to_100() {
        let total: f64 = [PriorityTier::Core, PriorityTier::Secondary, PriorityTier::Bonus]
            .iter()
            .map(|t| t.budget())
            .sum();
        assert_eq!(total, 100.0);
    }
}
