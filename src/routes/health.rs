//! Liveness probe for container orchestration.
//!
//! Returns 200 whenever the process can answer HTTP at all. Kubernetes restarts
//! the container when this stops responding.

use axum::{extract::State, http::StatusCode, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::HEALTHY_STATUS;
use crate::introspection;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
    pub hostname: String,
    pub uptime: String,
}

/// Health check handler.
pub async fn health(State(state): State<AppState>) -> (StatusCode, Json<HealthResponse>) {
    let response = HealthResponse {
        status: HEALTHY_STATUS,
        timestamp: Utc::now(),
        hostname: introspection::hostname(),
        uptime: state.started.uptime_display(),
    };

    (StatusCode::OK, Json(response))
}
