mod auth;
mod catalog;
mod config;
mod db;
mod errors;
mod inference;
mod models;
mod onboarding;
mod readiness;
mod routes;
mod state;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::db::create_pool;
use crate::inference::InferenceClient;
use crate::readiness::resources::ResourceCatalog;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Skillup API v{}", env!("CARGO_PKG_VERSION"));

    // Initialize PostgreSQL (applies migrations)
    let db = create_pool(&config.database_url).await?;

    // Initialize inference client. One attempt per analysis; failures fall back locally.
    let inference = InferenceClient::new(&config.inference_url, config.inference_timeout)
        .context("Failed to build inference HTTP client")?;
    info!(
        "Inference client initialized ({}, timeout {:?})",
        inference.base_url(),
        config.inference_timeout
    );

    let resources = ResourceCatalog::builtin();
    if resources.is_empty() {
        warn!("Resource catalog is empty; fallback roadmaps will carry no resources");
    } else {
        info!("Resource catalog loaded: {} skills", resources.len());
    }

    // Build app state
    let state = AppState {
        db,
        inference: Arc::new(inference),
        resources: Arc::new(resources),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive()); // TODO: restrict origins to the web app's host

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
