//! Catalogue endpoints. Public: no identity required.

use axum::Json;

use crate::catalog::roles::{JobDomain, JOB_DOMAINS};
use crate::catalog::skills::ALL_SKILLS;

/// GET /api/v1/catalog/domains
pub async fn handle_list_domains() -> Json<&'static [JobDomain]> {
    Json(JOB_DOMAINS)
}

/// GET /api/v1/catalog/skills
pub async fn handle_list_skills() -> Json<&'static [&'static str]> {
    Json(ALL_SKILLS)
}
