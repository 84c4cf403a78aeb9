//! k8s-demo: a demonstration workload for container orchestration platforms.
//!
//! Serves a landing page plus liveness, readiness, info and metrics endpoints
//! over plain HTTP. All handlers are stateless reads of the process start time
//! and runtime introspection; one middleware logs every request.

pub mod config;
pub mod error;
pub mod introspection;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod templates;

pub use config::{AppConfig, ConfigError};
pub use error::AppError;
pub use introspection::StartTime;
pub use routes::create_router;
pub use state::AppState;
