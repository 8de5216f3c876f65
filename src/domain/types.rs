//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory by the advisor and the report renderer
//! - exported to JSON alongside the text report

use std::path::PathBuf;

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Number of past days in every window, ending yesterday.
pub const PAST_DAYS: usize = 7;

/// Number of forecast days in every window, starting today.
pub const FORECAST_DAYS: usize = 3;

/// Total window length.
pub const WINDOW_DAYS: usize = PAST_DAYS + FORECAST_DAYS;

/// One day of weather: the two quantities the watering policy reads.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailyObservation {
    pub date: NaiveDate,
    pub max_temperature_c: f64,
    pub precipitation_mm: f64,
}

/// A validated 10-day window: contiguous dates, ascending, no gaps.
///
/// The first 7 entries are the past week (ending yesterday), the last 3 are
/// today plus the forecast. The past/future split is positional, so
/// construction rejects anything that is not contiguous ascending.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherWindow {
    days: Vec<DailyObservation>,
}

impl WeatherWindow {
    pub fn new(days: Vec<DailyObservation>) -> Result<Self, AppError> {
        if days.len() != WINDOW_DAYS {
            return Err(AppError::invalid_window(format!(
                "Expected {WINDOW_DAYS} daily observations, got {}.",
                days.len()
            )));
        }
        for pair in days.windows(2) {
            if Some(pair[1].date) != pair[0].date.checked_add_days(Days::new(1)) {
                return Err(AppError::invalid_window(format!(
                    "Dates must be contiguous ascending; {} is followed by {}.",
                    pair[0].date, pair[1].date
                )));
            }
        }
        Ok(Self { days })
    }

    pub fn days(&self) -> &[DailyObservation] {
        &self.days
    }

    /// The 7 observed days ending yesterday.
    pub fn past(&self) -> &[DailyObservation] {
        &self.days[..PAST_DAYS]
    }

    /// Today plus the next 2 forecast days.
    pub fn future(&self) -> &[DailyObservation] {
        &self.days[PAST_DAYS..]
    }

    pub fn first_date(&self) -> NaiveDate {
        self.days[0].date
    }

    pub fn last_date(&self) -> NaiveDate {
        self.days[WINDOW_DAYS - 1].date
    }
}

/// Policy constants for the watering decision.
///
/// These are configuration, not derived values; the advisor never reads
/// anything else.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Thresholds {
    /// Past-week rainfall (mm) below which the soil counts as dry.
    pub min_rain_mm: f64,
    /// A day counts as hot strictly above this max temperature (°C).
    pub hot_day_threshold_c: f64,
    /// Number of hot days in the window that triggers heat concern.
    pub hot_day_count: usize,
    /// Forecast rainfall (mm over the next 3 days) above which watering is
    /// skipped regardless of dryness or heat.
    pub forecast_rain_override_mm: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            min_rain_mm: 5.0,
            hot_day_threshold_c: 28.0,
            hot_day_count: 2,
            forecast_rain_override_mm: 15.0,
        }
    }
}

/// Where to fetch weather for.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Location {
    pub latitude: f64,
    pub longitude: f64,
    /// IANA timezone passed to the API so "today" matches the garden's clock.
    pub timezone: String,
    /// Human label used in the report header.
    pub label: String,
}

/// The outcome of one run, rendered into the report.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IrrigationDecision {
    pub should_water: bool,
    /// Names the condition(s) that governed the outcome, with values inline.
    pub reason: String,
    pub computed_at: NaiveDateTime,
}

/// Aggregates computed over one window.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct WindowSignals {
    /// Days in the full window whose max temperature is above the hot-day threshold.
    pub hot_days_count: usize,
    /// Days in the full window with under 1 mm of rain (informational).
    pub dry_days_count: usize,
    /// Total rainfall over the 7 past days (mm).
    pub rain_past_mm: f64,
    /// Total rainfall over the 3 forecast days (mm).
    pub rain_future_mm: f64,
}

/// A full run's configuration as understood by the pipeline.
///
/// This is derived from CLI flags (plus defaults).
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub location: Location,
    pub thresholds: Thresholds,
    pub report_path: PathBuf,
    pub plot: bool,
    pub plot_height: usize,
    pub export_path: Option<PathBuf>,
}

/// A saved advice file (JSON).
///
/// The portable snapshot of a run: the window, the aggregates, the decision,
/// and the thresholds that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceFile {
    pub tool: String,
    pub generated_at: NaiveDateTime,
    pub location: Location,
    pub thresholds: Thresholds,
    pub days: Vec<DailyObservation>,
    pub signals: WindowSignals,
    pub decision: IrrigationDecision,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(date: NaiveDate, temp: f64, rain: f64) -> DailyObservation {
        DailyObservation {
            date,
            max_temperature_c: temp,
            precipitation_mm: rain,
        }
    }

    fn contiguous_days(n: usize) -> Vec<DailyObservation> {
        let start = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        (0..n)
            .map(|i| day(start + Days::new(i as u64), 22.0, 0.5))
            .collect()
    }

    #[test]
    fn window_accepts_ten_contiguous_days() {
        let window = WeatherWindow::new(contiguous_days(10)).unwrap();
        assert_eq!(window.days().len(), 10);
        assert_eq!(window.past().len(), PAST_DAYS);
        assert_eq!(window.future().len(), FORECAST_DAYS);
        assert_eq!(window.first_date(), NaiveDate::from_ymd_opt(2025, 6, 1).unwrap());
        assert_eq!(window.last_date(), NaiveDate::from_ymd_opt(2025, 6, 10).unwrap());
    }

    #[test]
    fn window_rejects_wrong_length() {
        let err = WeatherWindow::new(contiguous_days(9)).unwrap_err();
        assert_eq!(err.exit_code(), 5);
        let err = WeatherWindow::new(contiguous_days(11)).unwrap_err();
        assert_eq!(err.exit_code(), 5);
    }

    #[test]
    fn window_rejects_gaps_and_disorder() {
        let mut gapped = contiguous_days(10);
        gapped[4].date = gapped[4].date + Days::new(1);
        assert_eq!(WeatherWindow::new(gapped).unwrap_err().exit_code(), 5);

        let mut disordered = contiguous_days(10);
        disordered.swap(2, 3);
        assert_eq!(WeatherWindow::new(disordered).unwrap_err().exit_code(), 5);
    }

    #[test]
    fn past_ends_one_day_before_future_starts() {
        let window = WeatherWindow::new(contiguous_days(10)).unwrap();
        let last_past = window.past().last().unwrap().date;
        let first_future = window.future().first().unwrap().date;
        assert_eq!(last_past + Days::new(1), first_future);
    }
}
