use serde::Serialize;
use tera::Tera;

use crate::error::AppError;

/// Template name of the landing page
pub const HOME_TEMPLATE: &str = "home.html";

/// Page title shown on the landing page
pub const HOME_TITLE: &str = "Kubernetes Demo Application";

/// An endpoint advertised on the landing page
#[derive(Debug, Clone, Copy, Serialize)]
pub struct EndpointLink {
    pub path: &'static str,
    pub description: &'static str,
}

/// Endpoints listed on the landing page, in display order
pub const ENDPOINTS: [EndpointLink; 4] = [
    EndpointLink {
        path: "/health",
        description: "Health check endpoint",
    },
    EndpointLink {
        path: "/ready",
        description: "Readiness check endpoint",
    },
    EndpointLink {
        path: "/info",
        description: "Application info (JSON)",
    },
    EndpointLink {
        path: "/metrics",
        description: "Simple metrics",
    },
];

/// Initialize the Tera template engine.
///
/// Templates are compiled into the binary so the service has no files to
/// find at runtime.
pub fn init_templates() -> Result<Tera, AppError> {
    let mut tera = Tera::default();
    tera.add_raw_template(HOME_TEMPLATE, include_str!("../templates/home.html"))?;
    Ok(tera)
}
