//! Application identity and build target.

use axum::Json;
use serde::Serialize;

use crate::config::{APP_NAME, APP_VERSION};
use crate::introspection::{self, RUNTIME_VERSION};

#[derive(Debug, Serialize)]
pub struct InfoResponse {
    pub app_name: &'static str,
    pub version: &'static str,
    pub hostname: String,
    pub runtime_version: &'static str,
    pub os: &'static str,
    pub architecture: &'static str,
}

/// Application info handler. Everything but the host name is fixed at build time.
pub async fn info() -> Json<InfoResponse> {
    Json(InfoResponse {
        app_name: APP_NAME,
        version: APP_VERSION,
        hostname: introspection::hostname(),
        runtime_version: RUNTIME_VERSION,
        os: introspection::os(),
        architecture: introspection::architecture(),
    })
}
