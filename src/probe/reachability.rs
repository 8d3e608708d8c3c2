//! Reachability probe and its result model.
//!
//! One probe instance watches one rover address. Every check is independent:
//! the result is computed, returned, and discarded.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;

use crate::probe::traits::Pinger;

/// Default rover address watched when no override is given.
pub const DEFAULT_TARGET: &str = "192.168.1.101";

/// Default per-attempt echo wait timeout (1 second).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(1);

/// Observed link state at the API boundary.
///
/// Exactly two values: the server never emits an "unknown" state. The status
/// page shows a neutral indicator only before its first successful fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkState {
    /// The most recent echo attempt succeeded.
    Active,
    /// The most recent echo attempt failed, timed out, or errored.
    Inactive,
}

impl LinkState {
    /// Get the state name as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

impl std::fmt::Display for LinkState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a single reachability check.
///
/// Serializes to the wire shape `{"status": ..., "rover_ip": ...}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReachabilityResult {
    /// Observed link state.
    #[serde(rename = "status")]
    pub state: LinkState,
    /// The address the check was issued against.
    #[serde(rename = "rover_ip")]
    pub target: String,
}

/// Configuration for the reachability probe.
#[derive(Debug, Clone)]
pub struct ProbeConfig {
    /// Target address (IPv4 or hostname).
    pub target: String,
    /// Per-attempt echo wait timeout.
    pub timeout: Duration,
}

impl ProbeConfig {
    /// Create a probe configuration for the given target address.
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the per-attempt timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self::new(DEFAULT_TARGET)
    }
}

/// Single-target reachability probe.
///
/// Holds the configured address and a [`Pinger`] capability. [`check`] issues
/// exactly one echo attempt and never fails: every probe-mechanism error is
/// collapsed to an inactive reading, so a lost packet, a down host, and a
/// broken ping binary are indistinguishable to callers.
///
/// [`check`]: ReachabilityProbe::check
#[derive(Clone)]
pub struct ReachabilityProbe {
    config: ProbeConfig,
    pinger: Arc<dyn Pinger>,
}

impl ReachabilityProbe {
    /// Create a probe from configuration and a pinger capability.
    pub fn new(config: ProbeConfig, pinger: Arc<dyn Pinger>) -> Self {
        Self { config, pinger }
    }

    /// The address this probe watches.
    pub fn target(&self) -> &str {
        &self.config.target
    }

    /// Run one reachability check.
    ///
    /// No retries: a single lost packet reads as inactive.
    pub async fn check(&self) -> ReachabilityResult {
        let state = match self
            .pinger
            .ping(&self.config.target, self.config.timeout)
            .await
        {
            Ok(true) => {
                tracing::debug!(host = %self.config.target, "Echo probe succeeded");
                LinkState::Active
            }
            Ok(false) => {
                tracing::debug!(host = %self.config.target, "Echo probe reported no answer");
                LinkState::Inactive
            }
            Err(e) => {
                tracing::warn!(host = %self.config.target, error = %e, "Echo probe failed");
                LinkState::Inactive
            }
        };

        ReachabilityResult {
            state,
            target: self.config.target.clone(),
        }
    }
}

impl std::fmt::Debug for ReachabilityProbe {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReachabilityProbe")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
