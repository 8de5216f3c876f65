//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - per-day observations and the validated 10-day window (`DailyObservation`, `WeatherWindow`)
//! - policy and fetch configuration (`Thresholds`, `Location`, `RunConfig`)
//! - decision outputs (`WindowSignals`, `IrrigationDecision`, `AdviceFile`)

pub mod types;

pub use types::*;
