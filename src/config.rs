//! Configuration module for the roverwatch service.
//!
//! There is no configuration file: the service runs from compiled-in
//! defaults, optionally overridden on the command line, and every component
//! receives its configuration explicitly at construction time.

use std::net::IpAddr;

use thiserror::Error;

use crate::probe::ProbeConfig;

// =============================================================================
// Constants
// =============================================================================

/// Default server bind address (all interfaces).
pub const DEFAULT_BIND: &str = "0.0.0.0";

/// Default server port.
pub const DEFAULT_PORT: u16 = 5000;

/// Configuration error types.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration validation failed.
    #[error("config validation error: {0}")]
    Validation(String),
}

// =============================================================================
// Server Configuration
// =============================================================================

/// Web server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Server bind address (default: "0.0.0.0").
    pub bind: String,

    /// Server port (default: 5000).
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: DEFAULT_BIND.to_string(),
            port: DEFAULT_PORT,
        }
    }
}

// =============================================================================
// Application Configuration
// =============================================================================

/// Top-level application configuration.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Web server configuration.
    pub server: ServerConfig,

    /// Reachability probe configuration.
    pub probe: ProbeConfig,
}

impl AppConfig {
    /// Validate configuration values.
    ///
    /// # Errors
    /// Returns `ConfigError::Validation` if any field is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        // Validate server bind address
        self.server.bind.parse::<IpAddr>().map_err(|_| {
            ConfigError::Validation(format!(
                "invalid server bind address: '{}'",
                self.server.bind
            ))
        })?;

        // Validate server port
        if self.server.port == 0 {
            return Err(ConfigError::Validation(
                "server port must be non-zero".to_string(),
            ));
        }

        // Validate probe target (IPv4 or hostname, handed to ping as one argv)
        if self.probe.target.is_empty() {
            return Err(ConfigError::Validation(
                "probe target must not be empty".to_string(),
            ));
        }
        if self.probe.target.chars().any(char::is_whitespace) {
            return Err(ConfigError::Validation(format!(
                "probe target must not contain whitespace: '{}'",
                self.probe.target
            )));
        }

        // Validate probe timeout
        if self.probe.timeout.is_zero() {
            return Err(ConfigError::Validation(
                "probe timeout must be non-zero".to_string(),
            ));
        }

        Ok(())
    }
}
