use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseResource {
    pub title: String,
    pub platform: String,
    pub url: String,
    pub duration: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaylistResource {
    pub title: String,
    pub channel: String,
    pub url: String,
    pub videos: u32,
}

/// One of the four roadmap buckets.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekPlan {
    pub week_number: u32,
    pub focus_skill: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Vec<String>>,
    pub courses: Vec<CourseResource>,
    pub youtube_playlists: Vec<PlaylistResource>,
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct RoadmapRow {
    pub id: Uuid,
    pub user_id: String,
    pub analysis_id: Uuid,
    pub weeks: Json<Vec<WeekPlan>>,
    pub created_at: DateTime<Utc>,
}
