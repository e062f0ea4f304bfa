//! Read/write scan JSON files.
//!
//! Scan JSON is the portable representation of one evolution run:
//! - the k range that was scanned
//! - one `ScanRecord` per k
//!
//! It exists so a run can be re-plotted or compared later without redoing
//! the scan. The schema is defined by `domain::ScanFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{ScanFile, ScanRecord};
use crate::error::AppError;

/// Write a scan JSON file.
pub fn write_scan_json(
    path: &Path,
    k_min: u32,
    k_max: u32,
    records: &[ScanRecord],
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::io(format!(
            "Failed to create scan JSON '{}': {e}",
            path.display()
        ))
    })?;

    let scan = ScanFile {
        tool: "rigid".to_string(),
        k_min,
        k_max,
        records: records.to_vec(),
    };

    serde_json::to_writer_pretty(file, &scan)
        .map_err(|e| AppError::io(format!("Failed to write scan JSON: {e}")))?;

    Ok(())
}

/// Read a scan JSON file.
pub fn read_scan_json(path: &Path) -> Result<ScanFile, AppError> {
    let file = File::open(path).map_err(|e| {
        AppError::io(format!("Failed to open scan JSON '{}': {e}", path.display()))
    })?;
    let scan: ScanFile = serde_json::from_reader(file)
        .map_err(|e| AppError::io(format!("Invalid scan JSON: {e}")))?;
    Ok(scan)
}
