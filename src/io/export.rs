//! Advice JSON export.
//!
//! The export is the "portable" snapshot of a run, meant to be easy to
//! consume from notebooks or downstream scripts:
//! - the 10-day window as parsed
//! - the aggregates and the decision
//! - the thresholds that produced it
//!
//! The schema is defined by `domain::AdviceFile`.

use std::fs::File;
use std::path::Path;

use crate::domain::{
    AdviceFile, IrrigationDecision, Location, Thresholds, WeatherWindow, WindowSignals,
};
use crate::error::AppError;

/// Write an advice JSON file.
pub fn write_advice_json(
    path: &Path,
    window: &WeatherWindow,
    signals: &WindowSignals,
    decision: &IrrigationDecision,
    location: &Location,
    thresholds: &Thresholds,
) -> Result<(), AppError> {
    let file = File::create(path).map_err(|e| {
        AppError::config(format!("Failed to create advice JSON '{}': {e}", path.display()))
    })?;

    let advice = AdviceFile {
        tool: "irrigate".to_string(),
        generated_at: decision.computed_at,
        location: location.clone(),
        thresholds: *thresholds,
        days: window.days().to_vec(),
        signals: *signals,
        decision: decision.clone(),
    };

    serde_json::to_writer_pretty(file, &advice)
        .map_err(|e| AppError::config(format!("Failed to write advice JSON: {e}")))?;

    Ok(())
}
