//! Claimant Response - Web Server Binary
//!
//! Starts the HTTP server for the claimant-response journey.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claimant-response-web
//!
//! # Run with environment variables
//! CMC_HOST=0.0.0.0 CMC_PORT=3000 CMC_CLAIM_STORE_URL=http://... cargo run --bin claimant-response-web
//! ```
//!
//! # Environment Variables
//!
//! * `CMC_HOST` - Server host (default: 0.0.0.0)
//! * `CMC_PORT` - Server port (default: 3000)
//! * `CMC_CLAIM_STORE_URL` - Claim store base URL
//! * `CMC_DRAFT_STORE_URL` - Draft store base URL
//! * `CMC_IDAM_URL` - Identity service base URL
//! * `CMC_FEATURE_TOGGLES_URL` - Feature toggle service base URL
//! * `CMC_PILOT_LIMIT` - Claim amount limit for pilot features (default: 300)
//! * `CMC_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::net::SocketAddr;

use interface_web::{config::WebConfig, create_router};
use infra_clients::Clients;
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = load_config();

    init_tracing(&config.log_level);

    tracing::info!(
        host = %config.host,
        port = %config.port,
        "Starting claimant-response web server"
    );

    let clients = Clients::new(&config.services())?;
    let app = create_router(clients, config.clone());

    let addr: SocketAddr = config.server_addr().parse()?;
    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

/// Loads configuration from environment variables, falling back to the
/// defaults when none are set.
fn load_config() -> WebConfig {
    WebConfig::from_env().unwrap_or_default()
}

/// Initializes the tracing subscriber for structured logging.
fn init_tracing(log_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(true))
        .init();
}

/// Waits for shutdown signal (Ctrl+C or SIGTERM).
///
/// This enables graceful shutdown of the server, allowing in-flight
/// requests to complete before the process exits.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
