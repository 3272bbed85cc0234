//! Record loading from the exported JSON collection.

use std::path::Path;

use podium_core::{PerformanceRecord, Result};
use tracing::debug;

/// Loads the record collection from a JSON file holding an array of records.
///
/// # Errors
///
/// Returns [`PodiumError::Io`](podium_core::PodiumError::Io) if the file
/// cannot be read and [`PodiumError::Json`](podium_core::PodiumError::Json)
/// if it is not a record array.
pub fn load_records(path: impl AsRef<Path>) -> Result<Vec<PerformanceRecord>> {
    let contents = std::fs::read_to_string(path)?;
    records_from_json_str(&contents)
}

/// Parses a JSON array of records.
pub fn records_from_json_str(s: &str) -> Result<Vec<PerformanceRecord>> {
    let records: Vec<PerformanceRecord> = serde_json::from_str(s)?;
    debug!(event = "records_loaded", records = records.len() as u64);
    Ok(records)
}
