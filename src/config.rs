//! Configuration loading and constants.
//!
//! Defines the fixed application identity reported by `/info`, HTTP cache
//! directives, default paths and the log filter. `AppConfig` is the root
//! configuration struct; every field has a default so the service runs without
//! a configuration file at all.

use const_format::formatcp;
use serde::Deserialize;
use std::path::Path;

// =============================================================================
// Application Identity
// =============================================================================

/// Application name reported by `/info`
pub const APP_NAME: &str = "go-k8s-demo";

/// Application version reported by `/info`
pub const APP_VERSION: &str = "1.0.0";

/// Message returned by the readiness probe
pub const READY_MESSAGE: &str = "Application is ready to serve traffic";

/// Status returned by the liveness probe
pub const HEALTHY_STATUS: &str = "healthy";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Home page - only uptime changes, so a short public lifetime is fine
pub const HTTP_CACHE_HOME_MAX_AGE: u32 = 5;

pub const CACHE_CONTROL_HOME: &str = formatcp!("public, max-age={}", HTTP_CACHE_HOME_MAX_AGE);

/// Probes and runtime introspection must always reach the process
pub const CACHE_CONTROL_PROBE: &str = "no-store";

/// Response header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

// =============================================================================
// Default Paths and Strings
// =============================================================================

/// Default bind address
pub const DEFAULT_HTTP_HOST: &str = "0.0.0.0";

/// Default listening port
pub const DEFAULT_HTTP_PORT: u16 = 8080;

/// Crate name as it appears in tracing targets
const LOG_TARGET: &str = "k8s_demo";

/// Default log filter when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = formatcp!("{}=info,tower_http=info", LOG_TARGET);

/// Default log format (text or json)
pub const DEFAULT_LOG_FORMAT: &str = "text";

/// Supported log formats
pub const LOG_FORMATS: [&str; 2] = ["text", "json"];

#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// HTTP listener configuration
    #[serde(default)]
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    #[serde(default = "HttpServerConfig::default_host")]
    pub host: String,
    #[serde(default = "HttpServerConfig::default_port")]
    pub port: u16,
}

impl Default for HttpServerConfig {
    fn default() -> Self {
        Self {
            host: Self::default_host(),
            port: Self::default_port(),
        }
    }
}

impl HttpServerConfig {
    fn default_host() -> String {
        DEFAULT_HTTP_HOST.to_string()
    }

    fn default_port() -> u16 {
        DEFAULT_HTTP_PORT
    }

    /// Socket address string suitable for `TcpListener::bind`
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default = "LoggingConfig::default_format")]
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            format: DEFAULT_LOG_FORMAT.to_string(),
        }
    }
}

impl LoggingConfig {
    fn default_format() -> String {
        DEFAULT_LOG_FORMAT.to_string()
    }

    pub fn is_json(&self) -> bool {
        self.format == "json"
    }
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml(&contents)
    }

    /// Parse and validate configuration from a TOML string.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(contents)?;

        if !LOG_FORMATS.contains(&config.logging.format.as_str()) {
            return Err(ConfigError::Validation(format!(
                "Unknown logging.format '{}', expected one of {:?}",
                config.logging.format, LOG_FORMATS
            )));
        }

        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
