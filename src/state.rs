//! Shared application state for request handlers.

use std::sync::Arc;
use tera::Tera;

use crate::introspection::StartTime;

/// Shared application state, cloneable across handlers via Arc-wrapped fields.
///
/// Contains the Tera template engine used by the home page and the process
/// start time all uptime figures derive from.
#[derive(Clone)]
pub struct AppState {
    pub tera: Arc<Tera>,
    pub started: StartTime,
}

impl AppState {
    /// Creates a new application state from the given templates and start time.
    pub fn new(tera: Tera, started: StartTime) -> Self {
        Self {
            tera: Arc::new(tera),
            started,
        }
    }
}
