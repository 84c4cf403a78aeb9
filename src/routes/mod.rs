//! HTTP route handlers.
//!
//! Five fixed routes, each matched by exact path. The JSON endpoints are
//! probes or live introspection and are never cached; the landing page gets a
//! short public lifetime. Request logging wraps the whole router, so unknown
//! paths (404) and wrong methods (405) are logged like any other request.

pub mod health;
pub mod home;
pub mod info;
pub mod metrics;
pub mod ready;

use axum::{middleware, routing::get, Router};
use http::header::{HeaderValue, CACHE_CONTROL};
use tower_http::set_header::SetResponseHeaderLayer;

use crate::config::{CACHE_CONTROL_HOME, CACHE_CONTROL_PROBE};
use crate::middleware::request_log_layer;
use crate::state::AppState;

/// Creates the Axum router with all routes and cache headers.
pub fn create_router(state: AppState) -> Router {
    // Landing page - only the uptime line changes
    let home_routes = Router::new().route("/", get(home::index)).layer(
        SetResponseHeaderLayer::if_not_present(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_HOME),
        ),
    );

    // Probes and metrics - always fresh
    let probe_routes = Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(ready::ready))
        .route("/info", get(info::info))
        .route("/metrics", get(metrics::metrics))
        .layer(SetResponseHeaderLayer::overriding(
            CACHE_CONTROL,
            HeaderValue::from_static(CACHE_CONTROL_PROBE),
        ));

    Router::new()
        .merge(home_routes)
        .merge(probe_routes)
        .layer(middleware::from_fn(request_log_layer))
        .with_state(state)
}
