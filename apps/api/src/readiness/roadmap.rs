//! Roadmap deriver. Spreads missing skills over a fixed four-week plan.
//!
//! Greedy, order-preserving partition: `ceil(n / 4)` skills per week, trailing
//! weeks left empty when there are fewer than four skills. Prerequisites are
//! never consulted here (see `readiness::gaps` for the display ordering).

use crate::inference::types::RemoteRoadmapWeek;
use crate::models::roadmap::WeekPlan;
use crate::readiness::resources::ResourceCatalog;

pub const ROADMAP_WEEKS: usize = 4;
pub const REVIEW_PLACEHOLDER: &str = "Review & Practice";

/// Splits `missing` into exactly `ROADMAP_WEEKS` ordered buckets.
pub fn partition_weeks(missing: &[String]) -> Vec<Vec<String>> {
    let per_week = missing.len().div_ceil(ROADMAP_WEEKS);
    (0..ROADMAP_WEEKS)
        .map(|week| {
            if per_week == 0 {
                return Vec::new();
            }
            let start = (week * per_week).min(missing.len());
            let end = ((week + 1) * per_week).min(missing.len());
            missing[start..end].to_vec()
        })
        .collect()
}

/// Local roadmap: partition, pick each week's focus, then attach resources.
pub fn derive_roadmap(missing: &[String], resources: &ResourceCatalog) -> Vec<WeekPlan> {
    let weeks = partition_weeks(missing)
        .into_iter()
        .enumerate()
        .map(|(i, bucket)| WeekPlan {
            week_number: i as u32 + 1,
            focus_skill: bucket
                .first()
                .cloned()
                .unwrap_or_else(|| REVIEW_PLACEHOLDER.to_string()),
            skills: Some(bucket),
            courses: Vec::new(),
            youtube_playlists: Vec::new(),
        })
        .collect();
    enrich_weeks(weeks, resources)
}

/// Roadmap skeleton returned by the inference service, before enrichment.
pub fn weeks_from_remote(remote: &[RemoteRoadmapWeek]) -> Vec<WeekPlan> {
    remote
        .iter()
        .map(|week| WeekPlan {
            week_number: week.week,
            focus_skill: week.focus.clone(),
            skills: Some(week.skills.clone()),
            courses: Vec::new(),
            youtube_playlists: Vec::new(),
        })
        .collect()
}

/// Replaces each week's resource lists with the catalog entry for its focus
/// skill. Weeks whose focus has no entry are returned unchanged.
pub fn enrich_weeks(weeks: Vec<WeekPlan>, resources: &ResourceCatalog) -> Vec<WeekPlan> {
    weeks
        .into_iter()
        .map(|mut week| {
            if resources.contains(&week.focus_skill) {
                let found = resources.lookup(&week.focus_skill);
                week.courses = found.courses;
                week.youtube_playlists = found.playlists;
            }
            week
        })
        .collect()
}
