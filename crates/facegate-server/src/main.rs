//! Facegate server - serves the built front-end behind a single-origin CORS policy.

use anyhow::Result;
use clap::Parser;
use facegate_core::Endpoint;
use facegate_server::{app, config::Config, logging, shutdown};
use std::net::SocketAddr;
use std::path::PathBuf;

use logging::{LogConfig, LogFormat};

#[derive(Parser, Debug)]
#[command(name = "facegate-server")]
#[command(about = "Static file server for the Facegate front-end")]
#[command(version)]
struct Cli {
    /// Path to config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Override port from config
    #[arg(short, long)]
    port: Option<u16>,

    /// Override the front-end build directory
    #[arg(long, value_name = "DIR")]
    dist_dir: Option<PathBuf>,

    /// Override the CORS origin (normalized to https://host)
    #[arg(long, value_name = "ORIGIN")]
    allowed_origin: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Enable trace logging
    #[arg(long)]
    trace: bool,

    /// Quiet mode (WARN and ERROR only)
    #[arg(short, long)]
    quiet: bool,

    /// Set log level for specific targets (e.g., "http=debug").
    /// Can be specified multiple times. Targets are prefixed with "facegate::" automatically.
    #[arg(long = "log", value_name = "TARGET=LEVEL")]
    log_overrides: Vec<String>,

    /// Log output format
    #[arg(long = "log-format", value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_cli(
        cli.verbose,
        cli.debug,
        cli.trace,
        cli.quiet,
        cli.log_overrides,
        cli.log_format,
    );
    logging::init(&log_config);

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(port) = cli.port {
        config.port = port;
    }
    if let Some(dist_dir) = cli.dist_dir {
        config.dist_dir = dist_dir;
    }
    if let Some(origin) = cli.allowed_origin {
        config.allowed_origin = Endpoint::parse(&origin);
    }

    tracing::info!(
        target: "facegate::startup",
        "Serving {} (CORS origin: {})",
        config.dist_dir.display(),
        config.allowed_origin
    );

    let router = app::build_router(&config)?;

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!(target: "facegate::startup", "Server is running on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown::shutdown_signal())
        .await?;

    tracing::info!(target: "facegate::startup", "Server stopped");
    Ok(())
}
