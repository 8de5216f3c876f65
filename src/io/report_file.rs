//! Report file write.
//!
//! The write happens only after the fetch and the decision have succeeded,
//! so a failed run leaves the previous day's report in place.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::error::AppError;

/// Overwrite the report file with the rendered text.
pub fn write_report(path: &Path, report: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create report '{}': {e}", path.display()))
    })?;
    file.write_all(report.as_bytes()).map_err(|e| {
        AppError::config(format!("Failed to write report '{}': {e}", path.display()))
    })?;
    Ok(())
}
