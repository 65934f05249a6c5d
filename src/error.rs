use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Closed set of failure kinds for one probe run.
///
/// Every variant is terminal: the run stops at the first failure and reports
/// it. Callers branch on the variant rather than string-matching messages.
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("dataset not found: {0}")]
    DatasetNotFound(PathBuf),

    #[error("failed to read dataset: {0}")]
    DatasetRead(#[from] csv::Error),

    /// The dataset exists but yielded zero rows with a second column.
    #[error("dataset is empty or has no valid rows")]
    DatasetEmpty,

    #[error("executable not found: {0}")]
    ExecutableNotFound(PathBuf),

    #[error("execution failed with status {status}: {stderr}")]
    ExecutionFailed { status: i32, stderr: String },

    #[error("execution timed out after {0:?}")]
    TimedOut(Duration),

    #[error("unexpected error: {0}")]
    Unexpected(#[from] std::io::Error),
}
