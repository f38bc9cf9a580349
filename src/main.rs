//! HTTP Redirect Relay
//!
//! A small relay built with Tokio and Axum: it listens on one local port and
//! answers every incoming request with a 302 redirect pointing at the same
//! path on a second local port. Useful when a client expects a service on
//! port A that actually runs on port B.
//!
//! # Architecture Overview
//!
//! ```text
//!                      ┌──────────────────────────────────────────┐
//!                      │              REDIRECT RELAY              │
//!                      │                                          │
//!     Client Request   │  ┌──────────┐      ┌─────────────────┐  │
//!     ─────────────────┼─▶│   http   │─────▶│    redirect     │  │
//!                      │  │  server  │      │    handler      │  │
//!                      │  └──────────┘      └────────┬────────┘  │
//!                      │                             │           │
//!     302 + Location   │                             ▼           │
//!     ◀────────────────┼── Location: <target-origin><path>       │
//!                      │                                          │
//!                      │  ┌────────────────────────────────────┐ │
//!                      │  │       Cross-Cutting Concerns       │ │
//!                      │  │  ┌────────┐ ┌─────────┐ ┌────────┐ │ │
//!                      │  │  │ config │ │ logging │ │lifecycle│ │ │
//!                      │  │  └────────┘ └─────────┘ └────────┘ │ │
//!                      │  └────────────────────────────────────┘ │
//!                      └──────────────────────────────────────────┘
//! ```
//!
//! No state, no forwarding, no backend pool: every request maps to exactly
//! one 302 response and the exchange ends there.

use clap::Parser;
use tokio::net::TcpListener;

use redirect_relay::config::{load_config, validate_config, ConfigError, RelayConfig};
use redirect_relay::http::HttpServer;
use redirect_relay::lifecycle::Shutdown;
use redirect_relay::observability::logging;

#[derive(Parser)]
#[command(name = "redirect-relay")]
#[command(about = "HTTP 302 relay between two local ports", long_about = None)]
struct Cli {
    /// Path to a TOML config file. Defaults apply when omitted.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Listener bind address, e.g. "0.0.0.0:3000".
    #[arg(short, long)]
    listen: Option<String>,

    /// Host every redirect points at.
    #[arg(long)]
    target_host: Option<String>,

    /// Port every redirect points at.
    #[arg(long)]
    target_port: Option<u16>,

    /// Scheme every redirect uses (http or https).
    #[arg(long)]
    target_scheme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RelayConfig::default(),
    };

    if let Some(listen) = cli.listen {
        config.listener.bind_address = listen;
    }
    if let Some(host) = cli.target_host {
        config.target.host = host;
    }
    if let Some(port) = cli.target_port {
        config.target.port = port;
    }
    if let Some(scheme) = cli.target_scheme {
        config.target.scheme = scheme;
    }

    // CLI overrides bypass the loader, so the merged result is re-checked.
    validate_config(&config).map_err(ConfigError::Validation)?;

    tracing::info!(
        bind_address = %config.listener.bind_address,
        target = %config.target.origin(),
        "Configuration loaded"
    );

    // A bind failure (port already in use) is fatal at startup.
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    let local_addr = listener.local_addr()?;

    tracing::info!(
        "Redirect server running on port {}, forwarding to port {}",
        local_addr.port(),
        config.target.port
    );

    let shutdown = Shutdown::new();
    let server = HttpServer::new(config);
    server.run(listener, shutdown.subscribe()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
