//! Platform ping executor.
//!
//! Spawns the operating system's ping utility for a single echo request and
//! maps its exit status to a reachability reading.

use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::probe::traits::{Pinger, ProbeError};

/// Extra wall-clock allowance beyond the echo wait timeout before the child
/// process is killed.
const TIMEOUT_GRACE: Duration = Duration::from_secs(1);

/// [`Pinger`] implementation backed by the platform ping utility.
///
/// One invocation sends a single packet with the OS-level wait timeout set
/// from the probe timeout. The child process itself is bounded by the probe
/// timeout plus one second; on expiry it is killed and reaped.
#[derive(Debug, Clone)]
pub struct SystemPinger {
    program: String,
}

impl SystemPinger {
    /// Create a pinger that runs the system `ping` binary.
    pub fn new() -> Self {
        Self {
            program: "ping".to_string(),
        }
    }

    /// Create a pinger that runs an arbitrary program in place of `ping`.
    ///
    /// Test seam: exit-status and timeout handling can be exercised with
    /// hermetic commands instead of ICMP traffic.
    pub fn with_program(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for SystemPinger {
    fn default() -> Self {
        Self::new()
    }
}

/// Build the platform-appropriate arguments for one echo request.
#[cfg(not(windows))]
fn ping_args(target: &str, timeout: Duration) -> Vec<String> {
    // iputils takes -W in whole seconds; keep at least one.
    let wait_secs = timeout.as_secs().max(1);
    vec![
        "-c".to_string(),
        "1".to_string(),
        "-W".to_string(),
        wait_secs.to_string(),
        target.to_string(),
    ]
}

#[cfg(windows)]
fn ping_args(target: &str, timeout: Duration) -> Vec<String> {
    // Windows ping takes -w in milliseconds.
    vec![
        "-n".to_string(),
        "1".to_string(),
        "-w".to_string(),
        timeout.as_millis().to_string(),
        target.to_string(),
    ]
}

#[async_trait::async_trait]
impl Pinger for SystemPinger {
    async fn ping(&self, target: &str, timeout: Duration) -> Result<bool, ProbeError> {
        let grace = timeout + TIMEOUT_GRACE;

        let mut child = Command::new(&self.program)
            .args(ping_args(target, timeout))
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .spawn()
            .map_err(ProbeError::Spawn)?;

        match tokio::time::timeout(grace, child.wait()).await {
            Ok(Ok(status)) => Ok(status.success()),
            Ok(Err(e)) => Err(ProbeError::Wait(e)),
            Err(_) => {
                // kill() also reaps the child.
                let _ = child.kill().await;
                Err(ProbeError::Timeout(grace))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(windows))]
    #[test]
    fn test_ping_args_unix() {
        let args = ping_args("192.168.1.101", Duration::from_secs(1));
        assert_eq!(args, vec!["-c", "1", "-W", "1", "192.168.1.101"]);
    }

    #[cfg(not(windows))]
    #[test]
    fn test_ping_args_subsecond_timeout_clamped() {
        let args = ping_args("10.0.0.1", Duration::from_millis(250));
        assert_eq!(args, vec!["-c", "1", "-W", "1", "10.0.0.1"]);
    }

    #[cfg(windows)]
    #[test]
    fn test_ping_args_windows() {
        let args = ping_args("192.168.1.101", Duration::from_secs(1));
        assert_eq!(args, vec!["-n", "1", "-w", "1000", "192.168.1.101"]);
    }

    #[tokio::test]
    async fn test_missing_binary_is_spawn_error() {
        let pinger = SystemPinger::with_program("roverwatch-no-such-ping-binary");
        let result = pinger.ping("192.0.2.1", Duration::from_secs(1)).await;
        assert!(matches!(result, Err(ProbeError::Spawn(_))));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_zero_exit_is_reachable() {
        // `true` ignores the ping-shaped arguments and exits 0.
        let pinger = SystemPinger::with_program("true");
        let result = pinger.ping("192.0.2.1", Duration::from_secs(1)).await;
        assert!(result.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_nonzero_exit_is_unreachable() {
        let pinger = SystemPinger::with_program("false");
        let result = pinger.ping("192.0.2.1", Duration::from_secs(1)).await;
        assert!(!result.unwrap());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_overrunning_child_is_killed() {
        use std::io::Write;
        use std::os::unix::fs::PermissionsExt;

        let dir = tempfile::tempdir().unwrap();
        let script = dir.path().join("slow-ping.sh");
        {
            let mut f = std::fs::File::create(&script).unwrap();
            writeln!(f, "#!/bin/sh").unwrap();
            writeln!(f, "sleep 30").unwrap();
        }
        std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

        let pinger = SystemPinger::with_program(script.to_string_lossy());
        let start = std::time::Instant::now();
        let result = pinger.ping("192.0.2.1", Duration::from_millis(100)).await;

        assert!(matches!(result, Err(ProbeError::Timeout(_))));
        // The grace window is timeout + 1s; the 30s sleep must not run out.
        assert!(start.elapsed() < Duration::from_secs(5));
    }
}
