use std::sync::Arc;

use sqlx::PgPool;

use crate::config::Config;
use crate::inference::ReadinessInference;
use crate::readiness::resources::ResourceCatalog;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub db: PgPool,
    /// Pluggable remote scorer. Default: `InferenceClient` over HTTP.
    pub inference: Arc<dyn ReadinessInference>,
    /// Built-in learning resources used to enrich fallback roadmaps.
    pub resources: Arc<ResourceCatalog>,
    pub config: Config,
}
