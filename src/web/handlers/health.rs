//! # Health Check Handlers
//!
//! Liveness and readiness endpoints for load balancers and orchestrators.

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::{debug, warn};

use crate::web::response_types::{ApiError, ApiResult};
use crate::web::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
}

impl HealthResponse {
    fn new(status: &str) -> Self {
        Self {
            status: status.to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub status: String,
    pub timestamp: String,
    pub version: String,
    pub uptime_seconds: u64,
    pub backend: String,
}

/// GET /health
pub async fn basic_health() -> Json<HealthResponse> {
    Json(HealthResponse::new("ok"))
}

/// GET /health/live
pub async fn liveness_probe(State(_state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse::new("alive"))
}

/// GET /health/ready
///
/// Ready once a hosted backend is installed and answering.
pub async fn readiness_probe(State(state): State<AppState>) -> ApiResult<Json<ReadinessResponse>> {
    debug!("Performing readiness probe");

    let Some(backend) = state.backend.as_ref() else {
        return Err(ApiError::unavailable("hosted backend not initialized"));
    };

    if let Err(err) = backend.health_check().await {
        warn!(error = %err, "Readiness probe failed");
        return Err(ApiError::unavailable(err.to_string()));
    }

    Ok(Json(ReadinessResponse {
        status: "ready".to_string(),
        timestamp: chrono::Utc::now().to_rfc3339(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.uptime_seconds(),
        backend: "healthy".to_string(),
    }))
}
