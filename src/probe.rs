//! Probe Layer
//!
//! Single-shot reachability checks against the monitored rover address.
//! The platform ping utility performs the actual echo request; the
//! [`Pinger`] capability seam keeps the subprocess out of tests.
//!
//! # Example
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use roverwatch::probe::{ProbeConfig, ReachabilityProbe, SystemPinger};
//!
//! # async fn demo() {
//! let probe = ReachabilityProbe::new(ProbeConfig::default(), Arc::new(SystemPinger::new()));
//! let result = probe.check().await;
//! println!("{}: {}", result.target, result.state);
//! # }
//! ```

mod ping;
mod reachability;
mod traits;

pub use ping::SystemPinger;
pub use reachability::{
    DEFAULT_TARGET, DEFAULT_TIMEOUT, LinkState, ProbeConfig, ReachabilityProbe,
    ReachabilityResult,
};
pub use traits::{Pinger, ProbeError};
