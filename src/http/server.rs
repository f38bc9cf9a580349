//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create Axum Router with the redirect handler on every route
//! - Wire up middleware (request tracing)
//! - Bind server to listener
//! - Serve until Ctrl+C or an internal shutdown trigger

use std::net::SocketAddr;

use axum::{routing::any, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower_http::trace::TraceLayer;

use crate::config::RelayConfig;
use crate::http::redirect::redirect_handler;

/// Application state injected into handlers.
#[derive(Clone)]
pub struct AppState {
    /// Fixed origin every Location header starts with.
    pub target_origin: String,

    /// Port the relay listens on, for per-request log lines.
    pub listen_port: u16,
}

/// HTTP server for the redirect relay.
pub struct HttpServer {
    router: Router,
    config: RelayConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given configuration.
    pub fn new(config: RelayConfig) -> Self {
        let listen_port = config
            .listener
            .bind_address
            .parse::<SocketAddr>()
            .map(|addr| addr.port())
            .unwrap_or(0);

        let state = AppState {
            target_origin: config.target.origin(),
            listen_port,
        };

        let router = Self::build_router(state);
        Self { router, config }
    }

    /// Build the Axum router with all middleware layers.
    ///
    /// The wildcard route plus the root route cover every path; `any`
    /// registers the handler for every method.
    fn build_router(state: AppState) -> Router {
        Router::new()
            .route("/{*path}", any(redirect_handler))
            .route("/", any(redirect_handler))
            .with_state(state)
            .layer(TraceLayer::new_for_http())
    }

    /// Run the server, accepting connections on the given listener.
    pub async fn run(
        self,
        listener: TcpListener,
        shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(
            address = %addr,
            "HTTP server starting"
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal(shutdown))
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }

    /// Get a reference to the config.
    pub fn config(&self) -> &RelayConfig {
        &self.config
    }
}

/// Wait for Ctrl+C or the internal shutdown broadcast.
async fn shutdown_signal(mut shutdown: broadcast::Receiver<()>) {
    tokio::select! {
        result = tokio::signal::ctrl_c() => {
            if result.is_ok() {
                tracing::info!("Shutdown signal received");
            }
        }
        _ = shutdown.recv() => {
            tracing::info!("Shutdown triggered");
        }
    }
}
