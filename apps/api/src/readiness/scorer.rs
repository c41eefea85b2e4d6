//! Readiness scorer: weighted overlap between a user's skills and a role.
//!
//! Core skills carry 80 points, bonus skills 20. A side with no listed skills
//! contributes nothing; its weight is not redistributed.

use serde::{Deserialize, Serialize};

use crate::readiness::normalize::SkillSet;

pub const CORE_WEIGHT: f64 = 80.0;
pub const BONUS_WEIGHT: f64 = 20.0;

// ────────────────────────────────────────────────────────────────────────────
// Output data models
// ────────────────────────────────────────────────────────────────────────────

/// Result of scoring one skill set against one role. Each matched/missing
/// pair is an exhaustive, disjoint partition of its requirement list, in
/// requirement order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadinessScore {
    pub score: u32, // 0 – 100
    pub matched_core: Vec<String>,
    pub missing_core: Vec<String>,
    pub matched_bonus: Vec<String>,
    pub missing_bonus: Vec<String>,
}

impl ReadinessScore {
    /// Matched core skills followed by matched bonus skills.
    pub fn matched_skills(&self) -> Vec<String> {
        self.matched_core
            .iter()
            .chain(&self.matched_bonus)
            .cloned()
            .collect()
    }

    /// Missing core skills followed by missing bonus skills. This is the
    /// order the roadmap consumes.
    pub fn missing_skills(&self) -> Vec<String> {
        self.missing_core
            .iter()
            .chain(&self.missing_bonus)
            .cloned()
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReadinessStatus {
    Ready,
    Almost,
    NeedsUpskilling,
}

impl ReadinessStatus {
    pub fn from_score(score: u32) -> Self {
        if score >= 80 {
            ReadinessStatus::Ready
        } else if score >= 60 {
            ReadinessStatus::Almost
        } else {
            ReadinessStatus::NeedsUpskilling
        }
    }

    /// Maps the inference service's free-text label ("Industry Ready",
    /// "Almost Ready", "Needs Upskilling").
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("industry ready") {
            ReadinessStatus::Ready
        } else if lower.contains("almost") {
            ReadinessStatus::Almost
        } else {
            ReadinessStatus::NeedsUpskilling
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ReadinessStatus::Ready => "ready",
            ReadinessStatus::Almost => "almost",
            ReadinessStatus::NeedsUpskilling => "needs_upskilling",
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Scoring
// ────────────────────────────────────────────────────────────────────────────

pub fn compute_readiness(
    user_skills: &[String],
    core_skills: &[String],
    bonus_skills: &[String],
) -> ReadinessScore {
    let owned = SkillSet::new(user_skills);

    let (matched_core, missing_core) = partition(&owned, core_skills);
    let (matched_bonus, missing_bonus) = partition(&owned, bonus_skills);

    let core_contribution = contribution(matched_core.len(), core_skills.len(), CORE_WEIGHT);
    let bonus_contribution = contribution(matched_bonus.len(), bonus_skills.len(), BONUS_WEIGHT);

    // Both contributions are non-negative, so round() is round-half-up here.
    let score = (core_contribution + bonus_contribution).round().clamp(0.0, 100.0) as u32;

    ReadinessScore {
        score,
        matched_core,
        missing_core,
        matched_bonus,
        missing_bonus,
    }
}

/// Share of required skills the user covers, as a 0–100 integer. Zero when
/// the role lists nothing.
pub fn compute_resume_fit(matched: usize, total_required: usize) -> u32 {
    if total_required == 0 {
        return 0;
    }
    ((matched as f64 / total_required as f64) * 100.0).round() as u32
}

fn partition(owned: &SkillSet, required: &[String]) -> (Vec<String>, Vec<String>) {
    required.iter().cloned().partition(|skill| owned.contains(skill))
}

fn contribution(matched: usize, total: usize, weight: f64) -> f64 {
    if total == 0 {
        0.0
    } else {
        (matched as f64 / total as f64) * weight
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
