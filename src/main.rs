//! Greeter: a minimal HTTP demo service.
//!
//! This is the application entry point. It initializes tracing, loads the optional
//! TOML configuration, resolves the version label from `APP_VERSION`, sets up the
//! Axum router and starts the HTTP server.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use greeter::config::{AppConfig, DEFAULT_LOG_FILTER};
use greeter::http::start_server;
use greeter::{create_router, AppState};

/// Greeter: Hello from the running deployment variant
#[derive(Parser, Debug)]
#[command(name = "greeter", version, about)]
struct Args {
    /// Path to configuration file (defaults apply when omitted)
    #[arg(short, long)]
    config: Option<String>,

    /// Log level filter (e.g., "greeter=debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Initialize tracing with priority: CLI > env > default
    let log_filter = args
        .log_level
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string());

    tracing_subscriber::registry()
        .with(EnvFilter::new(&log_filter))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::default(),
    };

    // Resolved exactly once; read-only for the rest of the process
    let config = config.with_env_version();
    tracing::info!(
        version = %config.version,
        config_file = ?args.config,
        "Loaded configuration"
    );

    let state = AppState::new(config);
    let app = create_router(state.clone());

    start_server(app, &state.config).await?;

    Ok(())
}
