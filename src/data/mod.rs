//! Run records and CSV persistence.
//!
//! One [`RunRecord`] per simulation, collected into a CSV table with the
//! header `algorithm,simulation_id,objective_value,runtime_seconds`.
//! Insertion order is irrelevant for analysis; it only matters for display.

pub mod sample;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::solver::Algorithm;

/// One simulation result row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunRecord {
    /// Which algorithm produced this run.
    pub algorithm: Algorithm,
    /// 1-based simulation counter within the algorithm's group.
    pub simulation_id: u32,
    /// Final objective value (non-negative).
    pub objective_value: f64,
    /// Wall-clock solve time in seconds.
    pub runtime_seconds: f64,
}

/// Reads all records from a results CSV.
pub fn read_records(path: &Path) -> Result<Vec<RunRecord>, Error> {
    let mut reader = csv::Reader::from_path(path)?;
    let mut records = Vec::new();
    for row in reader.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

/// Writes records (with header) to `path`, creating parent directories.
pub fn write_records(path: &Path, records: &[RunRecord]) -> Result<(), Error> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    let mut writer = csv::Writer::from_path(path)?;
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Appends records to an existing CSV, writing the header only when the
/// file does not exist yet.
pub fn append_records(path: &Path, records: &[RunRecord]) -> Result<(), Error> {
    if !path.exists() {
        return write_records(path, records);
    }
    let file = std::fs::OpenOptions::new().append(true).open(path)?;
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(file);
    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;
    Ok(())
}

/// Objective values for one algorithm's group, skipping non-finite entries
/// (the failed-run sentinel once rows are materialized).
pub fn objective_values(records: &[RunRecord], algorithm: Algorithm) -> Vec<f64> {
    records
        .iter()
        .filter(|r| r.algorithm == algorithm)
        .map(|r| r.objective_value)
        .filter(|v| v.is_finite())
        .collect()
}
