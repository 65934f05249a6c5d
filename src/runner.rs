use std::path::Path;
use std::process::Command;
use std::time::Duration;
use tracing::debug;

use crate::error::ProbeError;
use crate::util::run_cmd_with_timeout;

/// Default deadline for one target invocation (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;

/// Captured outcome of one successful target invocation
#[derive(Debug, Clone)]
pub struct ExecutionReport {
    pub stdout: String,
    pub stderr: String,
    pub status: i32,
}

/// Invoke the target executable with the sampled value as its sole argument.
///
/// Blocks until the child exits or the deadline expires; both output streams
/// are captured as text. A non-zero or abnormal exit becomes
/// [`ProbeError::ExecutionFailed`] carrying the captured stderr.
pub fn run_target(
    executable: &Path,
    argument: &str,
    timeout: Duration,
) -> Result<ExecutionReport, ProbeError> {
    debug!(
        "Invoking {} with argument ({} bytes)",
        executable.display(),
        argument.len()
    );

    let mut cmd = Command::new(executable);
    cmd.arg(argument);

    let output = run_cmd_with_timeout(cmd, timeout)?;

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    // Signal-terminated children have no code; report -1
    let status = output.status.code().unwrap_or(-1);

    if output.status.success() {
        debug!("✓ Target exited normally");
        Ok(ExecutionReport {
            stdout,
            stderr,
            status,
        })
    } else {
        debug!("✗ Target exited with status {}", status);
        Err(ProbeError::ExecutionFailed { status, stderr })
    }
}
