//! Learning-resource lookup keyed by skill name.
//!
//! A skill with no entry resolves to empty course and playlist lists; a miss
//! is never an error.

use std::collections::HashMap;

use reqwest::Url;
use serde::Serialize;

use crate::inference::types::{ResourceKind, SkillRecommendation};
use crate::models::roadmap::{CourseResource, PlaylistResource};
use crate::readiness::normalize::skill_key;

const DEFAULT_PLATFORM: &str = "Online Platform";
const DEFAULT_CHANNEL: &str = "YouTube";
const DEFAULT_COURSE_HOURS: f64 = 10.0;
const DEFAULT_PLAYLIST_HOURS: f64 = 1.0;

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SkillResources {
    pub courses: Vec<CourseResource>,
    pub playlists: Vec<PlaylistResource>,
}

#[derive(Debug, Clone, Default)]
pub struct ResourceCatalog {
    entries: HashMap<String, SkillResources>,
}

impl ResourceCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers resources for a skill. A later insert for the same skill
    /// (in any casing) replaces the earlier one.
    pub fn insert(&mut self, skill: &str, resources: SkillResources) {
        self.entries.insert(skill_key(skill), resources);
    }

    pub fn lookup(&self, skill: &str) -> SkillResources {
        self.entries
            .get(&skill_key(skill))
            .cloned()
            .unwrap_or_default()
    }

    pub fn contains(&self, skill: &str) -> bool {
        self.entries.contains_key(&skill_key(skill))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Builds a catalog from the inference service's recommendations.
    pub fn from_recommendations(recommendations: &[SkillRecommendation]) -> Self {
        let mut catalog = Self::new();
        for rec in recommendations {
            let courses = rec
                .resources
                .iter()
                .filter(|r| r.kind == ResourceKind::Course)
                .map(|r| {
                    let hours = positive_or(r.duration_hours, DEFAULT_COURSE_HOURS);
                    CourseResource {
                        title: r.title.clone(),
                        platform: non_empty_or(r.provider.as_deref(), DEFAULT_PLATFORM),
                        url: url_or_search(&r.url, "https://www.google.com/search", "q", &r.title),
                        duration: format!("{hours} hours"),
                    }
                })
                .collect();
            let playlists = rec
                .resources
                .iter()
                .filter(|r| r.kind == ResourceKind::Youtube)
                .map(|r| {
                    let hours = positive_or(r.duration_hours, DEFAULT_PLAYLIST_HOURS);
                    PlaylistResource {
                        title: r.title.clone(),
                        channel: non_empty_or(r.channel.as_deref(), DEFAULT_CHANNEL),
                        url: url_or_search(
                            &r.url,
                            "https://www.youtube.com/results",
                            "search_query",
                            &r.title,
                        ),
                        videos: (hours * 2.0).ceil() as u32,
                    }
                })
                .collect();
            catalog.insert(&rec.skill, SkillResources { courses, playlists });
        }
        catalog
    }

    /// Curated resources bundled with the service, used on the local path.
    pub fn builtin() -> Self {
        let mut catalog = Self::new();
        for (skill, courses, playlists) in BUILTIN_RESOURCES {
            catalog.insert(
                skill,
                SkillResources {
                    courses: courses
                        .iter()
                        .map(|(title, platform, duration)| CourseResource {
                            title: title.to_string(),
                            platform: platform.to_string(),
                            url: "#".to_string(),
                            duration: duration.to_string(),
                        })
                        .collect(),
                    playlists: playlists
                        .iter()
                        .map(|(title, channel, videos)| PlaylistResource {
                            title: title.to_string(),
                            channel: channel.to_string(),
                            url: "#".to_string(),
                            videos: *videos,
                        })
                        .collect(),
                },
            );
        }
        catalog
    }
}

fn positive_or(value: Option<f64>, default: f64) -> f64 {
    match value {
        Some(v) if v > 0.0 => v,
        _ => default,
    }
}

fn non_empty_or(value: Option<&str>, default: &str) -> String {
    match value {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => default.to_string(),
    }
}

fn url_or_search(url: &str, search_base: &str, param: &str, title: &str) -> String {
    if !url.is_empty() {
        return url.to_string();
    }
    Url::parse_with_params(search_base, &[(param, title)])
        .map(String::from)
        .unwrap_or_else(|_| search_base.to_string())
}

type CourseSeed = (&'static str, &'static str, &'static str);
type PlaylistSeed = (&'static str, &'static str, u32);

const BUILTIN_RESOURCES: &[(&str, &[CourseSeed], &[PlaylistSeed])] = &[
    (
        "TypeScript",
        &[
            ("TypeScript for Beginners", "Udemy", "8 hours"),
            ("Understanding TypeScript", "Coursera", "12 hours"),
        ],
        &[
            ("TypeScript Full Course", "Traversy Media", 1),
            ("TypeScript Tutorial", "The Net Ninja", 12),
        ],
    ),
    (
        "React",
        &[
            ("React - The Complete Guide", "Udemy", "48 hours"),
            ("React Basics", "Coursera", "20 hours"),
        ],
        &[
            ("React JS Crash Course", "Traversy Media", 1),
            ("Full React Course", "freeCodeCamp", 1),
        ],
    ),
    (
        "Next.js",
        &[
            ("Next.js & React - The Complete Guide", "Udemy", "25 hours"),
            ("Learn Next.js", "Vercel", "10 hours"),
        ],
        &[
            ("Next.js 14 Full Course", "JavaScript Mastery", 1),
            ("Next.js Tutorial for Beginners", "The Net Ninja", 10),
        ],
    ),
    (
        "Testing",
        &[
            ("JavaScript Testing Introduction", "Udemy", "8 hours"),
            ("React Testing Library", "Testing JavaScript", "15 hours"),
        ],
        &[
            ("React Testing Library Tutorial", "The Net Ninja", 8),
            ("Jest Crash Course", "Traversy Media", 1),
        ],
    ),
    (
        "Docker",
        &[
            ("Docker Mastery", "Udemy", "20 hours"),
            ("Intro to Containers", "Coursera", "12 hours"),
        ],
        &[
            ("Docker Tutorial for Beginners", "TechWorld with Nana", 1),
            ("Docker Crash Course", "Traversy Media", 1),
        ],
    ),
    (
        "Kubernetes",
        &[
            ("Kubernetes for Developers", "Udemy", "15 hours"),
            ("Getting Started with Kubernetes", "Coursera", "18 hours"),
        ],
        &[
            ("Kubernetes Tutorial for Beginners", "TechWorld with Nana", 1),
            ("Kubernetes Course", "freeCodeCamp", 1),
        ],
    ),
];
