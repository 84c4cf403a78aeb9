//! k8s-demo: application entry point.
//!
//! Captures the process start time, initializes tracing, loads optional
//! configuration, sets up the Axum router and serves HTTP until the process is
//! terminated.

use std::net::SocketAddr;

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use k8s_demo::config::{AppConfig, DEFAULT_LOG_FILTER};
use k8s_demo::templates::init_templates;
use k8s_demo::{create_router, AppState, StartTime};

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static ALLOCATOR: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

/// k8s-demo: liveness, readiness, info and metrics endpoints for orchestration demos
#[derive(Parser, Debug)]
#[command(name = "k8s-demo", version, about)]
struct Args {
    /// Path to an optional configuration file
    #[arg(short, long)]
    config: Option<String>,

    /// Port to listen on (overrides the configuration file)
    #[arg(short, long, env = "PORT")]
    port: Option<u16>,

    /// Log level filter (e.g., "k8s_demo=debug,tower_http=info")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let started = StartTime::now();

    // Parse command line arguments
    let args = Args::parse();

    // Read configuration first so the log format is known; a failure is
    // reported once tracing is up
    let loaded = match &args.config {
        Some(path) => AppConfig::load(path),
        None => Ok(AppConfig::default()),
    };
    let json_logs = matches!(&loaded, Ok(config) if config.logging.is_json());

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    let registry =
        tracing_subscriber::registry().with(tracing_subscriber::EnvFilter::new(&log_filter));
    if json_logs {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }

    let config_source = args.config.as_deref().unwrap_or("<defaults>");
    let mut config = match loaded {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(config = config_source, error = %e, "Failed to load configuration");
            return Err(e.into());
        }
    };
    if let Some(port) = args.port {
        config.http.port = port;
    }

    tracing::info!(
        config = config_source,
        started_at = %started.started_at(),
        "Loaded configuration"
    );

    let tera = init_templates()?;
    let app = create_router(AppState::new(tera, started));

    let addr = config.http.bind_addr();
    tracing::info!("Starting server on port {}...", config.http.port);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "Failed to bind listener");
            return Err(e.into());
        }
    };
    tracing::info!("Access at http://localhost:{}", config.http.port);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
