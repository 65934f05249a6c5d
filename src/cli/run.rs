use anyhow::{Context, Result};
use std::path::Path;
use std::time::Duration;
use tracing::{info, warn};

use crate::config::Config;
use crate::runner;
use crate::sampler;

/// Execute one probe run: sample a value from the dataset, then feed it to
/// the target executable. Sampling failures terminate the run before any
/// process is spawned.
pub fn run(
    dataset: Option<String>,
    executable: Option<String>,
    config_path: Option<String>,
    timeout_override: Option<u64>,
    seed: Option<u64>,
) -> Result<()> {
    // Load config (explicit path, current dir, or user config dir)
    let config = Config::load_with_path(config_path)?;

    // CLI arguments take precedence over config values
    let dataset_path = dataset
        .or(config.dataset_path)
        .context("No dataset path given (pass it as an argument or set dataset_path in config)")?;
    let executable_path = executable.or(config.executable_path).context(
        "No executable path given (pass it as an argument or set executable_path in config)",
    )?;
    let timeout_secs = timeout_override.unwrap_or(config.timeout_secs);

    info!("Dataset: {}", dataset_path);
    info!("Executable: {}", executable_path);
    info!("Timeout: {}s", timeout_secs);
    if let Some(seed) = seed {
        info!("Sampling with fixed seed: {}", seed);
    }

    let value = sampler::sample_from_csv(Path::new(&dataset_path), seed)?;
    println!("Selected random string: {}", value);

    let report = runner::run_target(
        Path::new(&executable_path),
        &value,
        Duration::from_secs(timeout_secs),
    )?;

    info!("Execution completed successfully (status {})", report.status);
    if !report.stderr.is_empty() {
        warn!("Target wrote to stderr: {}", report.stderr.trim_end());
    }
    println!("Output: {}", report.stdout);

    Ok(())
}
