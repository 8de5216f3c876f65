//! Formatted report output.
//!
//! We keep formatting code in one place so:
//! - the policy code stays clean and testable
//! - output changes are localized (important for future snapshot tests)
//!
//! The report is a pure function of its inputs; the run timestamp comes in
//! through the decision rather than being read here.

use crate::domain::{
    IrrigationDecision, Location, Thresholds, WeatherWindow, WindowSignals, FORECAST_DAYS,
    PAST_DAYS, WINDOW_DAYS,
};

/// Render the full report text written to the report file.
pub fn format_report(
    window: &WeatherWindow,
    signals: &WindowSignals,
    decision: &IrrigationDecision,
    location: &Location,
    thresholds: &Thresholds,
    chart: Option<&str>,
) -> String {
    let mut out = String::new();

    out.push_str(&format!("=== Garden irrigation report - {} ===\n", location.label));
    out.push_str(&format!(
        "Run: {}\n",
        decision.computed_at.format("%Y-%m-%d %H:%M")
    ));
    out.push_str(&format!(
        "Window: {} to {} ({} past days, {} forecast days)\n",
        window.first_date(),
        window.last_date(),
        PAST_DAYS,
        FORECAST_DAYS
    ));
    out.push('\n');

    out.push_str(&format_day_table(window));

    out.push_str("\nAggregates:\n");
    out.push_str(&format!(
        "- rain, past {} days : {:>6.1} mm (dry below {:.1} mm)\n",
        PAST_DAYS, signals.rain_past_mm, thresholds.min_rain_mm
    ));
    out.push_str(&format!(
        "- rain, next {} days : {:>6.1} mm (override above {:.1} mm)\n",
        FORECAST_DAYS, signals.rain_future_mm, thresholds.forecast_rain_override_mm
    ));
    out.push_str(&format!(
        "- hot days (>{:.0} C) : {} of {} (concern at {})\n",
        thresholds.hot_day_threshold_c, signals.hot_days_count, WINDOW_DAYS, thresholds.hot_day_count
    ));
    out.push_str(&format!(
        "- dry days (<1 mm)  : {} of {}\n",
        signals.dry_days_count, WINDOW_DAYS
    ));

    if let Some(chart) = chart {
        out.push('\n');
        out.push_str(chart);
    }

    out.push('\n');
    out.push_str(&format!("Conclusion: {}\n", conclusion_line(decision)));

    out
}

/// The one-line verdict used both in the report and by `check`.
pub fn conclusion_line(decision: &IrrigationDecision) -> String {
    if decision.should_water {
        format!("Water now: {}.", decision.reason)
    } else {
        format!("No watering needed: {}.", decision.reason)
    }
}

fn format_day_table(window: &WeatherWindow) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<12} {:>8} {:>9}  {}\n",
        "date", "tmax_c", "rain_mm", "when"
    ));
    out.push_str(&format!("{:-<12} {:-<8} {:-<9}  {:-<8}\n", "", "", "", ""));

    for (i, day) in window.days().iter().enumerate() {
        let when = if i < PAST_DAYS {
            "past"
        } else if i == PAST_DAYS {
            "today"
        } else {
            "forecast"
        };
        out.push_str(&format!(
            "{:<12} {:>8.1} {:>9.1}  {}\n",
            day.date.to_string(),
            day.max_temperature_c,
            day.precipitation_mm,
            when
        ));
    }

    out
}
