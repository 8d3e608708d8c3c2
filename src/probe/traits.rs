//! Core probe trait and error types.

use std::time::Duration;

use thiserror::Error;

/// Errors that can occur while issuing an echo request.
///
/// None of these reach the HTTP layer: [`ReachabilityProbe::check`] collapses
/// every variant to an inactive reading, so a broken probe mechanism and an
/// unreachable target are indistinguishable at the API boundary.
///
/// [`ReachabilityProbe::check`]: crate::probe::ReachabilityProbe::check
#[derive(Debug, Error)]
pub enum ProbeError {
    /// The ping command could not be started.
    #[error("failed to spawn ping command: {0}")]
    Spawn(std::io::Error),

    /// Waiting for the ping command to finish failed.
    #[error("failed to wait for ping command: {0}")]
    Wait(std::io::Error),

    /// The ping command outlived its grace window and was killed.
    #[error("ping command timed out after {0:?}")]
    Timeout(Duration),
}

/// Capability seam for issuing a single echo request.
///
/// The production implementation spawns the platform ping utility; tests
/// substitute fakes so no real networking or child processes are involved.
#[async_trait::async_trait]
pub trait Pinger: Send + Sync + 'static {
    /// Issue exactly one echo request against `target`.
    ///
    /// Returns `Ok(true)` when the target answered within `timeout`,
    /// `Ok(false)` when it did not, and an error only when the probe
    /// mechanism itself failed.
    async fn ping(&self, target: &str, timeout: Duration) -> Result<bool, ProbeError>;
}
