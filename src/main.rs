//! Roverwatch Binary Entry Point
//!
//! This binary runs the roverwatch reachability monitor.
//! Core functionality is provided by the `roverwatch` library crate.

use clap::Parser;
use roverwatch::{
    config::AppConfig,
    probe::{ReachabilityProbe, SystemPinger},
    server::{AppState, create_router},
};
use std::net::SocketAddr;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Roverwatch - Rover Reachability Monitor
#[derive(Parser, Debug)]
#[command(name = "roverwatch", version, about, long_about = None)]
struct Cli {
    /// Rover address to monitor (overrides the built-in default)
    #[arg(short, long)]
    target: Option<String>,

    /// Server bind address (overrides the built-in default)
    #[arg(long)]
    bind: Option<String>,

    /// Server port (overrides the built-in default)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,roverwatch=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Roverwatch - Rover Reachability Monitor");

    // Parse CLI arguments
    let cli = Cli::parse();

    // Apply CLI overrides onto the compiled-in defaults
    let mut config = AppConfig::default();
    if let Some(target) = cli.target {
        config.probe.target = target;
    }
    if let Some(bind) = cli.bind {
        config.server.bind = bind;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    config.validate()?;

    tracing::info!(
        "Monitoring {} (echo timeout {:?}, one attempt per status request)",
        config.probe.target,
        config.probe.timeout,
    );

    // Wire the probe to the system ping utility
    let probe = ReachabilityProbe::new(config.probe.clone(), Arc::new(SystemPinger::new()));

    // Build Axum router
    let app = create_router(AppState { probe });

    // Parse bind address
    let addr: SocketAddr = format!("{}:{}", config.server.bind, config.server.port).parse()?;

    tracing::info!("Status page listening on: http://{}", addr);
    tracing::info!("Press Ctrl+C to shutdown");

    // Start server with graceful shutdown
    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}

/// Setup graceful shutdown signal handler.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C signal");
        }
        _ = terminate => {
            tracing::info!("Received terminate signal");
        }
    }
}
