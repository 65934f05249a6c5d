// Runner behavior against real fixture executables
use csvprobe::error::ProbeError;
use csvprobe::runner::run_target;
use std::path::Path;
use std::time::Duration;

#[cfg(unix)]
fn write_script(dir: &tempfile::TempDir, name: &str, body: &str) -> std::path::PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.path().join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{}\n", body)).unwrap();
    std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).unwrap();
    path
}

#[test]
fn test_nonexistent_executable_signals_not_found() {
    let path = Path::new("/nonexistent/csvprobe-target");

    // Deterministic regardless of the argument string
    for arg in ["alpha", "beta", ""] {
        let result = run_target(path, arg, Duration::from_secs(5));
        match result {
            Err(ProbeError::ExecutableNotFound(p)) => assert_eq!(p, path),
            other => panic!("Expected ExecutableNotFound, got {:?}", other),
        }
    }
}

#[cfg(unix)]
#[test]
fn test_echo_target_reports_argument_exactly() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = write_script(&dir, "echo-arg", "printf '%s' \"$1\"");

    let report = run_target(&script, "alpha", Duration::from_secs(5)).unwrap();
    assert_eq!(report.stdout, "alpha");
    assert_eq!(report.status, 0);
}

#[cfg(unix)]
#[test]
fn test_failing_target_carries_stderr() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = write_script(&dir, "fail", "echo boom >&2\nexit 1");

    let result = run_target(&script, "alpha", Duration::from_secs(5));
    match result {
        Err(ProbeError::ExecutionFailed { status, stderr }) => {
            assert_eq!(status, 1);
            assert!(stderr.contains("boom"));
        }
        other => panic!("Expected ExecutionFailed, got {:?}", other),
    }
}

#[cfg(unix)]
#[test]
fn test_slow_target_times_out() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = write_script(&dir, "slow", "sleep 10");

    let result = run_target(&script, "alpha", Duration::from_millis(200));
    assert!(matches!(result, Err(ProbeError::TimedOut(_))));
}

#[cfg(unix)]
#[test]
fn test_timed_out_child_is_reaped() {
    let dir = tempfile::TempDir::new().unwrap();
    // exec so the shell is replaced and the killed pid is the sleep itself
    let script = write_script(&dir, "slow-marked", "exec sleep 7654");

    let result = run_target(&script, "alpha", Duration::from_millis(200));
    assert!(matches!(result, Err(ProbeError::TimedOut(_))));

    // The kill races with our return; poll for the child to disappear
    // rather than sleeping a fixed interval
    let gone = (0..50).any(|_| {
        std::thread::sleep(Duration::from_millis(100));
        let pgrep = std::process::Command::new("pgrep")
            .args(["-f", "sleep 7654"])
            .output()
            .unwrap();
        // pgrep exits non-zero when nothing matches
        !pgrep.status.success()
    });
    assert!(gone, "timed-out child still running after kill");
}

#[cfg(unix)]
#[test]
fn test_success_report_captures_stderr_and_status() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = write_script(&dir, "chatty", "echo note >&2\nprintf '%s' \"$1\"");

    let report = run_target(&script, "alpha", Duration::from_secs(5)).unwrap();
    assert_eq!(report.stdout, "alpha");
    assert!(report.stderr.contains("note"));
    assert_eq!(report.status, 0);
}

#[cfg(unix)]
#[test]
fn test_target_receives_exactly_one_argument() {
    let dir = tempfile::TempDir::new().unwrap();
    let script = write_script(&dir, "count-args", "printf '%d' \"$#\"");

    let report = run_target(&script, "hello world", Duration::from_secs(5)).unwrap();
    assert_eq!(report.stdout, "1");
}
