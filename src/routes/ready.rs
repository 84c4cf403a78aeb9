//! Readiness probe.
//!
//! The service has no dependencies to wait on, so it is ready as soon as it
//! accepts connections.

use axum::{http::StatusCode, Json};
use serde::Serialize;

use crate::config::READY_MESSAGE;
use crate::introspection;

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub hostname: String,
    pub message: &'static str,
}

pub async fn ready() -> (StatusCode, Json<ReadinessResponse>) {
    let response = ReadinessResponse {
        ready: true,
        hostname: introspection::hostname(),
        message: READY_MESSAGE,
    };

    (StatusCode::OK, Json(response))
}
