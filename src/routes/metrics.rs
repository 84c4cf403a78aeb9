//! Runtime metrics sampled at request time.
//!
//! `goroutine_count` is the wire name for the number of live tokio tasks.

use axum::{extract::State, Json};
use serde::Serialize;

use crate::introspection;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct MetricsResponse {
    #[serde(rename = "goroutine_count")]
    pub task_count: usize,
    pub memory_allocated_mb: u64,
    pub memory_system_mb: u64,
    pub uptime_seconds: f64,
}

pub async fn metrics(State(state): State<AppState>) -> Json<MetricsResponse> {
    Json(MetricsResponse {
        task_count: introspection::task_count(),
        memory_allocated_mb: introspection::to_mib(introspection::allocated_bytes()),
        memory_system_mb: introspection::to_mib(introspection::system_bytes()),
        uptime_seconds: state.started.uptime().as_secs_f64(),
    })
}
