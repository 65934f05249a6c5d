//! Shared process-spawning helpers.

use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::mpsc;
use std::time::Duration;

use crate::error::ProbeError;

/// Kill a process by PID. Uses SIGKILL on Unix (Linux, macOS, WSL).
#[cfg(unix)]
fn kill_process(pid: u32) {
    let _ = Command::new("kill")
        .arg("-9")
        .arg(pid.to_string())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}

#[cfg(not(unix))]
fn kill_process(pid: u32) {
    // On Windows (non-WSL), use taskkill
    let _ = Command::new("taskkill")
        .args(["/F", "/PID", &pid.to_string()])
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status();
}

/// Run a command with a deadline, killing the child on expiry.
///
/// Spawns the command with piped stdout/stderr and waits up to `timeout` for
/// it to finish. A spawn failure with `NotFound` maps to
/// [`ProbeError::ExecutableNotFound`]; expiry kills the child (it is reaped
/// on the waiter thread) and returns [`ProbeError::TimedOut`].
pub fn run_cmd_with_timeout(mut cmd: Command, timeout: Duration) -> Result<Output, ProbeError> {
    let program = PathBuf::from(cmd.get_program());
    let child = cmd
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|err| {
            if err.kind() == std::io::ErrorKind::NotFound {
                ProbeError::ExecutableNotFound(program)
            } else {
                ProbeError::Unexpected(err)
            }
        })?;

    let pid = child.id();
    let (sender, receiver) = mpsc::channel();

    std::thread::spawn(move || {
        let result = child.wait_with_output();
        let _ = sender.send(result);
    });

    match receiver.recv_timeout(timeout) {
        Ok(result) => result.map_err(ProbeError::Unexpected),
        Err(_) => {
            kill_process(pid);
            Err(ProbeError::TimedOut(timeout))
        }
    }
}
