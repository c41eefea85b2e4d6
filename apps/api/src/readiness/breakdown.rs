//! Score breakdown: per-skill signed contributions for display.
//!
//! Each impact is rounded on its own, so the breakdown does not always sum to
//! the readiness score (three core skills at 27 each sum to 81, not 80).

use serde::{Deserialize, Serialize};

use crate::readiness::scorer::{ReadinessScore, BONUS_WEIGHT, CORE_WEIGHT};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImpactStatus {
    Matched,
    Missing,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakdownEntry {
    pub skill: String,
    pub impact: i32,
    pub status: ImpactStatus,
}

impl BreakdownEntry {
    fn matched(skill: &str, impact: i32) -> Self {
        Self {
            skill: skill.to_string(),
            impact,
            status: ImpactStatus::Matched,
        }
    }

    fn missing(skill: &str, impact: i32) -> Self {
        Self {
            skill: skill.to_string(),
            impact: -impact,
            status: ImpactStatus::Missing,
        }
    }
}

/// Two-tier breakdown used by the local path. Order: matched core, matched
/// bonus, missing core, missing bonus.
pub fn build_breakdown(
    score: &ReadinessScore,
    core_count: usize,
    bonus_count: usize,
) -> Vec<BreakdownEntry> {
    let core_impact = per_skill_impact(CORE_WEIGHT, core_count);
    let bonus_impact = per_skill_impact(BONUS_WEIGHT, bonus_count);

    let mut entries = Vec::with_capacity(
        score.matched_core.len()
            + score.matched_bonus.len()
            + score.missing_core.len()
            + score.missing_bonus.len(),
    );
    entries.extend(score.matched_core.iter().map(|s| BreakdownEntry::matched(s, core_impact)));
    entries.extend(score.matched_bonus.iter().map(|s| BreakdownEntry::matched(s, bonus_impact)));
    entries.extend(score.missing_core.iter().map(|s| BreakdownEntry::missing(s, core_impact)));
    entries.extend(score.missing_bonus.iter().map(|s| BreakdownEntry::missing(s, bonus_impact)));
    entries
}

/// Rounded share of `budget` for one skill out of `count`. An empty list is
/// treated as a count of one.
pub fn per_skill_impact(budget: f64, count: usize) -> i32 {
    (budget / count.max(1) as f64).round() as i32
}
