use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;

/// GET /health
/// Liveness of this service plus whether the inference service answers.
/// An unreachable inference service does not fail the check: analyses fall
/// back to local scoring.
pub async fn health_handler(State(state): State<AppState>) -> Json<Value> {
    let inference = if state.inference.health().await {
        "reachable"
    } else {
        "unreachable"
    };

    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "skillup-api",
        "inference": inference
    }))
}
