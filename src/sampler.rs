use csv::ReaderBuilder;
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::SeedableRng;
use std::path::Path;
use tracing::debug;

use crate::error::ProbeError;

/// Read the dataset and return one uniformly-random value from its second
/// column.
///
/// Every line is treated as data (no header row). Rows with fewer than two
/// fields are discarded rather than rejected. A `seed` makes the choice
/// reproducible; without one the thread-local generator is used.
pub fn sample_from_csv(path: &Path, seed: Option<u64>) -> Result<String, ProbeError> {
    if !path.exists() {
        return Err(ProbeError::DatasetNotFound(path.to_path_buf()));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut values = Vec::new();
    for record in reader.records() {
        let record = record?;
        if let Some(value) = record.get(1) {
            values.push(value.to_string());
        }
    }

    debug!("Collected {} candidate values from dataset", values.len());

    let choice = match seed {
        Some(seed) => values.choose(&mut StdRng::seed_from_u64(seed)),
        None => values.choose(&mut rand::rng()),
    };

    choice.cloned().ok_or(ProbeError::DatasetEmpty)
}
