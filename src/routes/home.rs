//! Landing page with pod details and links to the probe endpoints.

use axum::{extract::State, response::Html};
use tracing::instrument;

use crate::error::AppError;
use crate::introspection::{self, RUNTIME_VERSION};
use crate::state::AppState;
use crate::templates::{ENDPOINTS, HOME_TEMPLATE, HOME_TITLE};

/// Home page handler.
#[instrument(name = "home::index", skip(state))]
pub async fn index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let mut context = tera::Context::new();
    context.insert("title", HOME_TITLE);
    context.insert("hostname", &introspection::hostname());
    context.insert("runtime_version", RUNTIME_VERSION);
    context.insert("os", introspection::os());
    context.insert("architecture", introspection::architecture());
    context.insert("uptime", &state.started.uptime_display());
    context.insert("endpoints", &ENDPOINTS);

    let html = state.tera.render(HOME_TEMPLATE, &context)?;
    Ok(Html(html))
}
