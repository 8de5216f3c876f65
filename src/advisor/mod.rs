//! Aggregation signals and the watering decision policy.
//!
//! Everything here is a pure function of the validated window and the
//! thresholds, so the policy is testable without touching the network.

use chrono::NaiveDateTime;

use crate::domain::{IrrigationDecision, Thresholds, WeatherWindow, WindowSignals, FORECAST_DAYS};

/// Rainfall below which a day counts as dry (informational signal only).
const DRY_DAY_MM: f64 = 1.0;

/// Compute the aggregates the policy reads.
///
/// The past/future rainfall split is positional: first 7 entries vs last 3.
pub fn compute_signals(window: &WeatherWindow, thresholds: &Thresholds) -> WindowSignals {
    let hot_days_count = window
        .days()
        .iter()
        .filter(|d| d.max_temperature_c > thresholds.hot_day_threshold_c)
        .count();
    let dry_days_count = window
        .days()
        .iter()
        .filter(|d| d.precipitation_mm < DRY_DAY_MM)
        .count();
    let rain_past_mm = window.past().iter().map(|d| d.precipitation_mm).sum();
    let rain_future_mm = window.future().iter().map(|d| d.precipitation_mm).sum();

    WindowSignals {
        hot_days_count,
        dry_days_count,
        rain_past_mm,
        rain_future_mm,
    }
}

/// Apply the threshold policy to a window's signals.
///
/// Watering is recommended when the past week was dry or heat exposure is
/// significant, unless enough rain is forecast to make it redundant:
///
/// `should_water = (dry || heat) && !forecast_override`
///
/// `dry` is a strict comparison; a past-week total exactly at the minimum
/// does not count as dry.
pub fn decide(
    signals: &WindowSignals,
    thresholds: &Thresholds,
    computed_at: NaiveDateTime,
) -> IrrigationDecision {
    let dry = signals.rain_past_mm < thresholds.min_rain_mm;
    let heat = signals.hot_days_count >= thresholds.hot_day_count;
    let forecast_override = signals.rain_future_mm > thresholds.forecast_rain_override_mm;

    let (should_water, reason) = if (dry || heat) && forecast_override {
        (
            false,
            format!(
                "{:.1} mm of rain is forecast over the next {} days (override above {:.1} mm), watering would be redundant",
                signals.rain_future_mm, FORECAST_DAYS, thresholds.forecast_rain_override_mm
            ),
        )
    } else if dry && heat {
        (
            true,
            format!(
                "only {:.1} mm of rain fell in the past week (under {:.1} mm) and {} day(s) topped {:.1} °C",
                signals.rain_past_mm,
                thresholds.min_rain_mm,
                signals.hot_days_count,
                thresholds.hot_day_threshold_c
            ),
        )
    } else if dry {
        (
            true,
            format!(
                "only {:.1} mm of rain fell in the past week (under {:.1} mm)",
                signals.rain_past_mm, thresholds.min_rain_mm
            ),
        )
    } else if heat {
        (
            true,
            format!(
                "{} day(s) in the window topped {:.1} °C (concern at {})",
                signals.hot_days_count, thresholds.hot_day_threshold_c, thresholds.hot_day_count
            ),
        )
    } else {
        (
            false,
            format!(
                "recent rainfall is sufficient ({:.1} mm over the past week) and only {} day(s) topped {:.1} °C",
                signals.rain_past_mm, signals.hot_days_count, thresholds.hot_day_threshold_c
            ),
        )
    };

    IrrigationDecision {
        should_water,
        reason,
        computed_at,
    }
}

/// Signals plus decision in one call.
pub fn advise(
    window: &WeatherWindow,
    thresholds: &Thresholds,
    computed_at: NaiveDateTime,
) -> (WindowSignals, IrrigationDecision) {
    let signals = compute_signals(window, thresholds);
    let decision = decide(&signals, thresholds, computed_at);
    (signals, decision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    use crate::domain::{DailyObservation, WINDOW_DAYS};

    fn window(temps: [f64; WINDOW_DAYS], rains: [f64; WINDOW_DAYS]) -> WeatherWindow {
        let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        let days = (0..WINDOW_DAYS)
            .map(|i| DailyObservation {
                date: start + Days::new(i as u64),
                max_temperature_c: temps[i],
                precipitation_mm: rains[i],
            })
            .collect();
        WeatherWindow::new(days).unwrap()
    }

    fn run_at() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 7, 8)
            .unwrap()
            .and_hms_opt(6, 30, 0)
            .unwrap()
    }

    #[test]
    fn dry_and_hot_week_with_no_forecast_rain_waters() {
        // Scenario: past week all 0 mm, every day 30 °C, nothing forecast.
        let w = window([30.0; 10], [0.0; 10]);
        let (signals, decision) = advise(&w, &Thresholds::default(), run_at());

        assert_eq!(signals.hot_days_count, 10);
        assert!((signals.rain_past_mm - 0.0).abs() < 1e-9);
        assert!((signals.rain_future_mm - 0.0).abs() < 1e-9);
        assert!(decision.should_water);
        assert!(decision.reason.contains("0.0 mm of rain fell"));
        assert!(decision.reason.contains("topped 28.0 °C"));
    }

    #[test]
    fn rainy_mild_week_does_not_water() {
        // Scenario: ~50 mm over the past week, 20 °C days.
        let mut rains = [0.0; 10];
        for r in rains.iter_mut().take(7) {
            *r = 50.0 / 7.0;
        }
        let w = window([20.0; 10], rains);
        let (signals, decision) = advise(&w, &Thresholds::default(), run_at());

        assert_eq!(signals.hot_days_count, 0);
        assert!(!decision.should_water);
        assert!(decision.reason.contains("rainfall is sufficient"));
    }

    #[test]
    fn forecast_rain_overrides_dry_and_hot_week() {
        // Scenario: bone-dry hot week, but 30 mm forecast.
        let mut rains = [0.0; 10];
        rains[7] = 10.0;
        rains[8] = 12.0;
        rains[9] = 8.0;
        let w = window([31.0; 10], rains);
        let (signals, decision) = advise(&w, &Thresholds::default(), run_at());

        assert!((signals.rain_future_mm - 30.0).abs() < 1e-9);
        assert!(!decision.should_water);
        assert!(decision.reason.contains("forecast"));
        assert!(decision.reason.contains("redundant"));
    }

    #[test]
    fn past_rain_exactly_at_minimum_is_not_dry() {
        // 5.0 mm total over the past week, mild temperatures: strictly-below
        // semantics mean this is not dry, so no watering.
        let mut rains = [0.0; 10];
        rains[0] = 5.0;
        let w = window([20.0; 10], rains);
        let (signals, decision) = advise(&w, &Thresholds::default(), run_at());

        assert!((signals.rain_past_mm - 5.0).abs() < 1e-9);
        assert!(!decision.should_water);
    }

    #[test]
    fn heat_alone_triggers_watering() {
        // Plenty of past rain but three days above the heat threshold.
        let mut temps = [22.0; 10];
        temps[2] = 29.0;
        temps[5] = 30.5;
        temps[8] = 28.5;
        let mut rains = [0.0; 10];
        rains[1] = 12.0;
        let w = window(temps, rains);
        let (signals, decision) = advise(&w, &Thresholds::default(), run_at());

        assert_eq!(signals.hot_days_count, 3);
        assert!(decision.should_water);
        assert!(decision.reason.contains("3 day(s)"));
        assert!(!decision.reason.contains("mm of rain fell"));
    }

    #[test]
    fn hot_day_threshold_is_strict() {
        // A day exactly at the threshold is not hot.
        let mut temps = [20.0; 10];
        temps[0] = 28.0;
        let w = window(temps, [2.0; 10]);
        let signals = compute_signals(&w, &Thresholds::default());
        assert_eq!(signals.hot_days_count, 0);
    }

    #[test]
    fn rain_split_is_positional_not_filtered() {
        // Same multiset of rain values; moving the wet days from the past
        // into the forecast must change both totals.
        let mut front_loaded = [0.0; 10];
        front_loaded[0] = 6.0;
        front_loaded[1] = 4.0;
        let mut back_loaded = [0.0; 10];
        back_loaded[8] = 6.0;
        back_loaded[9] = 4.0;

        let a = compute_signals(&window([20.0; 10], front_loaded), &Thresholds::default());
        let b = compute_signals(&window([20.0; 10], back_loaded), &Thresholds::default());

        assert!((a.rain_past_mm - 10.0).abs() < 1e-9);
        assert!((a.rain_future_mm - 0.0).abs() < 1e-9);
        assert!((b.rain_past_mm - 0.0).abs() < 1e-9);
        assert!((b.rain_future_mm - 10.0).abs() < 1e-9);
    }

    #[test]
    fn dry_day_count_covers_the_full_window() {
        let mut rains = [0.0; 10];
        rains[3] = 1.0;
        rains[9] = 2.5;
        let w = window([20.0; 10], rains);
        let signals = compute_signals(&w, &Thresholds::default());
        assert_eq!(signals.dry_days_count, 8);
    }

    #[test]
    fn decision_is_deterministic_for_equal_inputs() {
        let w = window([26.0; 10], [0.2; 10]);
        let (_, first) = advise(&w, &Thresholds::default(), run_at());
        let (_, second) = advise(&w, &Thresholds::default(), run_at());
        assert_eq!(first.should_water, second.should_water);
        assert_eq!(first.reason, second.reason);
        assert_eq!(first.computed_at, second.computed_at);
    }
}
