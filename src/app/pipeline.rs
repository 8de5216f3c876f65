//! Shared advice pipeline used by both subcommands.
//!
//! Keeping this in one place avoids duplicating the core workflow:
//! fetch -> validated window -> signals -> decision -> rendered report
//!
//! The subcommands then focus on presentation (full report vs one line).

use chrono::Local;

use crate::advisor;
use crate::data::OpenMeteoClient;
use crate::domain::{IrrigationDecision, RunConfig, WeatherWindow, WindowSignals};
use crate::error::AppError;

/// All computed outputs of a single run.
#[derive(Debug, Clone)]
pub struct RunOutput {
    pub window: WeatherWindow,
    pub signals: WindowSignals,
    pub decision: IrrigationDecision,
    pub report: String,
}

/// Execute the full pipeline: fetch the window, then decide and render.
pub fn run_advice(config: &RunConfig) -> Result<RunOutput, AppError> {
    let client = OpenMeteoClient::new()?;
    log::info!(
        "Fetching weather for {} ({}, {})",
        config.location.label,
        config.location.latitude,
        config.location.longitude
    );
    let window = client.fetch_window(&config.location)?;

    run_advice_with_window(config, window)
}

/// Execute the pipeline with a pre-fetched window.
///
/// This is what the tests drive, with windows built from fixtures.
pub fn run_advice_with_window(
    config: &RunConfig,
    window: WeatherWindow,
) -> Result<RunOutput, AppError> {
    let computed_at = Local::now().naive_local();

    let signals = advisor::compute_signals(&window, &config.thresholds);
    let decision = advisor::decide(&signals, &config.thresholds, computed_at);
    log::debug!("Signals: {signals:?}");

    let chart = config
        .plot
        .then(|| crate::plot::render_window_chart(&window, config.plot_height));
    let report = crate::report::format_report(
        &window,
        &signals,
        &decision,
        &config.location,
        &config.thresholds,
        chart.as_deref(),
    );

    Ok(RunOutput {
        window,
        signals,
        decision,
        report,
    })
}
