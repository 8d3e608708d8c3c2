//! Roverwatch - Rover Reachability Monitor
//!
//! This crate provides the core functionality for the roverwatch service.
//! It can be used as a library by other Rust projects, or run as a standalone
//! binary with the `roverwatch` executable.
//!
//! # Architecture
//!
//! - **Probe**: single-shot reachability checks against the rover address,
//!   backed by the platform ping utility behind a [`Pinger`] capability seam
//! - **Server**: Axum web layer serving the status JSON API and the polling
//!   status page
//! - **Config**: compiled-in defaults with launch-time overrides, validated
//!   before the server starts
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use roverwatch::{AppConfig, AppState, ReachabilityProbe, SystemPinger, create_router};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::default();
//!     config.validate()?;
//!
//!     let probe = ReachabilityProbe::new(config.probe.clone(), Arc::new(SystemPinger::new()));
//!     let app = create_router(AppState { probe });
//!
//!     let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//!     axum::serve(listener, app).await?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod probe;
pub mod server;

pub use config::{AppConfig, ConfigError, ServerConfig};
pub use probe::{
    LinkState, Pinger, ProbeConfig, ProbeError, ReachabilityProbe, ReachabilityResult,
    SystemPinger,
};
pub use server::{AppState, create_router};
