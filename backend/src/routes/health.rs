//! Health check endpoints
//!
//! Provides Kubernetes-compatible health check endpoints:
//! - /health - Basic health check
//! - /health/ready - Readiness check (checks the food dataset)
//! - /health/live - Liveness check (always returns OK if server is running)

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checks: Option<HealthChecks>,
}

/// Individual health checks
#[derive(Serialize)]
pub struct HealthChecks {
    pub dataset: DatasetStatus,
}

/// Status of the food dataset
#[derive(Serialize)]
pub struct DatasetStatus {
    pub status: String,
    pub path: String,
    pub records: usize,
    pub eligible_records: usize,
    pub skipped_rows: usize,
    pub loaded_at: DateTime<Utc>,
}

/// Basic health check endpoint
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}

/// Readiness check - whether the service is ready to accept traffic
/// Returns 503 while the food dataset holds no positive-energy records
pub async fn readiness_check(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let catalog = state.catalog();
    let is_ready = catalog.is_ready();

    let dataset = DatasetStatus {
        status: if is_ready { "healthy" } else { "unhealthy" }.to_string(),
        path: state.config().dataset.path.clone(),
        records: catalog.len(),
        eligible_records: catalog.eligible_len(),
        skipped_rows: catalog.skipped_rows(),
        loaded_at: catalog.loaded_at(),
    };

    let response = HealthResponse {
        status: if is_ready { "ready" } else { "not_ready" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: Some(HealthChecks { dataset }),
    };

    if is_ready {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Liveness check - whether the service is alive
/// Always returns OK if the server is running
pub async fn liveness_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "alive".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: None,
    })
}
