//! Inference client: the single point of entry for calls to the external
//! readiness-scoring service.
//!
//! One attempt per analysis. Any failure (transport, timeout, non-2xx status,
//! unparseable body) is returned as an `InferenceError`; callers substitute
//! the local computation and never surface the error to the user.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;
use tracing::debug;

pub mod types;

use types::{AnalyzeRequest, AnalyzeResponse};

const ANALYZE_PATH: &str = "/inference/analyze";
const HEALTH_PATH: &str = "/health";
/// Liveness probes never wait as long as an analysis call.
const HEALTH_TIMEOUT: Duration = Duration::from_secs(2);
/// Longest slice of an error body carried into `InferenceError::Status`.
const ERROR_BODY_LIMIT: usize = 200;

#[derive(Debug, Error)]
pub enum InferenceError {
    #[error("HTTP error: {0}")]
    Http(#[source] reqwest::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("Inference service returned status {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Unparseable inference response: {0}")]
    Parse(#[from] serde_json::Error),
}

/// The remote scoring seam. `AppState` carries an `Arc<dyn ReadinessInference>`
/// so tests and alternative backends can swap it without touching handlers.
#[async_trait]
pub trait ReadinessInference: Send + Sync {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, InferenceError>;

    /// Liveness of the backend. In-process implementations are always up.
    async fn health(&self) -> bool {
        true
    }
}

#[derive(Clone)]
pub struct InferenceClient {
    client: Client,
    base_url: String,
    timeout: Duration,
}

impl InferenceClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, InferenceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(InferenceError::Http)?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn classify(&self, error: reqwest::Error) -> InferenceError {
        if error.is_timeout() {
            InferenceError::Timeout(self.timeout)
        } else {
            InferenceError::Http(error)
        }
    }
}

#[async_trait]
impl ReadinessInference for InferenceClient {
    async fn analyze(&self, request: &AnalyzeRequest) -> Result<AnalyzeResponse, InferenceError> {
        let response = self
            .client
            .post(format!("{}{ANALYZE_PATH}", self.base_url))
            .json(request)
            .send()
            .await
            .map_err(|e| self.classify(e))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| self.classify(e))?;

        if !status.is_success() {
            debug!("Inference service returned {status}: {body}");
            return Err(InferenceError::Status {
                status: status.as_u16(),
                message: status_message(status, &body),
            });
        }

        let parsed: AnalyzeResponse = serde_json::from_str(&body)?;

        debug!(
            "Inference call succeeded: label={}, score={:.2}",
            parsed.readiness_label, parsed.readiness_score
        );

        Ok(parsed)
    }

    /// True when the service answers its health probe with 2xx.
    async fn health(&self) -> bool {
        match self
            .client
            .get(format!("{}{HEALTH_PATH}", self.base_url))
            .timeout(HEALTH_TIMEOUT.min(self.timeout))
            .send()
            .await
        {
            Ok(response) => response.status().is_success(),
            Err(e) => {
                debug!("Inference health probe failed: {e}");
                false
            }
        }
    }
}

/// The service's own error text when it sent one (truncated), otherwise the
/// status reason.
fn status_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if body.is_empty() {
        return status
            .canonical_reason()
            .unwrap_or("unknown status")
            .to_string();
    }
    match body.char_indices().nth(ERROR_BODY_LIMIT) {
        Some((cut, _)) => format!("{}...", &body[..cut]),
        None => body.to_string(),
    }
}

/// Maps a role domain (catalogue id or display name) to the inference
/// service's role id. Unknown domains are lowercased with spaces and hyphens
/// turned into underscores.
pub fn role_id_for_domain(domain: &str) -> String {
    let normalized = domain.trim().to_lowercase();
    let known = match normalized.as_str() {
        "frontend" | "frontend developer" | "frontend-developer" | "frontend development" => {
            Some("frontend_developer")
        }
        "backend" | "backend developer" | "backend-developer" | "backend development" => {
            Some("backend_developer")
        }
        "fullstack"
        | "full stack developer"
        | "fullstack-developer"
        | "fullstack developer"
        | "full stack development" => Some("fullstack_developer"),
        "data" | "data scientist" | "data-scientist" | "data science" => Some("data_scientist"),
        "devops" | "devops engineer" | "devops-engineer" | "devops engineering" => {
            Some("devops_engineer")
        }
        _ => None,
    };

    match known {
        Some(id) => id.to_string(),
        None => normalized
            .split_whitespace()
            .collect::<Vec<_>>()
            .join("_")
            .replace('-', "_"),
    }
}
