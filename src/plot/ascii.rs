//! ASCII chart of the 10-day window for the text report.
//!
//! This is intentionally "dumb" (fixed-size grid), optimized for:
//! - quick visual sanity checks in a plain-text report
//! - deterministic output (helpful for golden tests)
//!
//! Chart elements:
//! - `*` max temperature per day, scaled to the window's own range
//! - a rain row underneath (` ` none, `.` trace, `+` light, `#` heavy)
//! - a marker row flagging each day as `p`ast, `t`oday, or `f`orecast

use crate::domain::{WeatherWindow, PAST_DAYS, WINDOW_DAYS};

/// Characters per day column.
const COL_WIDTH: usize = 3;

/// Render the 10-day temperature/rain chart.
///
/// `height` is the number of temperature rows; small values are clamped so
/// the scale stays readable.
pub fn render_window_chart(window: &WeatherWindow, height: usize) -> String {
    let height = height.max(4);
    let days = window.days();

    let t_min = days
        .iter()
        .map(|d| d.max_temperature_c)
        .fold(f64::INFINITY, f64::min);
    let t_max = days
        .iter()
        .map(|d| d.max_temperature_c)
        .fold(f64::NEG_INFINITY, f64::max);
    let (t_min, t_max) = pad_range(t_min, t_max);

    let width = WINDOW_DAYS * COL_WIDTH;
    let mut grid = vec![vec![' '; width]; height];
    for (i, day) in days.iter().enumerate() {
        let row = row_for(day.max_temperature_c, t_min, t_max, height);
        grid[row][i * COL_WIDTH + 1] = '*';
    }

    let mut out = String::new();
    out.push_str("tmax (C)\n");
    for (r, cells) in grid.iter().enumerate() {
        let label = t_max - (t_max - t_min) * r as f64 / (height - 1) as f64;
        let line: String = cells.iter().collect();
        out.push_str(&format!("{label:>6.1} |{}\n", line.trim_end()));
    }
    out.push_str(&format!("       +{:-<width$}\n", ""));

    let rain_cells: String = days
        .iter()
        .map(|d| format!(" {} ", rain_glyph(d.precipitation_mm)))
        .collect();
    out.push_str(&format!("  rain |{}\n", rain_cells.trim_end()));

    let when_cells: String = (0..WINDOW_DAYS)
        .map(|i| {
            let mark = if i < PAST_DAYS {
                'p'
            } else if i == PAST_DAYS {
                't'
            } else {
                'f'
            };
            format!(" {mark} ")
        })
        .collect();
    out.push_str(&format!("  when |{}\n", when_cells.trim_end()));

    out
}

fn row_for(value: f64, min: f64, max: f64, height: usize) -> usize {
    let frac = ((value - min) / (max - min)).clamp(0.0, 1.0);
    let row = ((1.0 - frac) * (height - 1) as f64).round() as usize;
    row.min(height - 1)
}

fn pad_range(min: f64, max: f64) -> (f64, f64) {
    if !(min.is_finite() && max.is_finite()) {
        return (0.0, 1.0);
    }
    let span = max - min;
    if span.abs() < 1e-9 {
        return (min - 0.5, max + 0.5);
    }
    (min - span * 0.05, max + span * 0.05)
}

fn rain_glyph(mm: f64) -> char {
    match mm {
        m if m < 0.1 => ' ',
        m if m < 1.0 => '.',
        m if m < 5.0 => '+',
        _ => '#',
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Days, NaiveDate};

    use crate::domain::DailyObservation;

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

    #[test]
    fn chart_has_title_axis_rain_and_marker_rows() {
        let chart = render_window_chart(&window([25.0; 10], [0.0; 10]), 8);
        let lines: Vec<&str> = chart.lines().collect();
        // title + 8 temperature rows + axis + rain + when
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], "tmax (C)");
        assert!(lines[9].contains('+'));
        assert!(lines[10].starts_with("  rain |"));
        assert!(lines[11].starts_with("  when |"));
    }

    #[test]
    fn one_temperature_point_per_day() {
        let mut temps = [20.0; 10];
        for (i, t) in temps.iter_mut().enumerate() {
            *t += i as f64;
        }
        let chart = render_window_chart(&window(temps, [0.0; 10]), 10);
        assert_eq!(chart.matches('*').count(), WINDOW_DAYS);
    }

    #[test]
    fn hotter_days_plot_higher() {
        let mut temps = [20.0; 10];
        temps[9] = 35.0;
        let chart = render_window_chart(&window(temps, [0.0; 10]), 10);
        let lines: Vec<&str> = chart.lines().collect();
        let first_star_row = lines.iter().position(|l| l.contains('*')).unwrap();
        // The hottest day is the only point in the top-most starred row, in
        // the last day's column.
        let row = lines[first_star_row];
        assert_eq!(row.matches('*').count(), 1);
        let star_col = row.find('*').unwrap();
        assert!(star_col > "  20.0 |".len() + 8 * COL_WIDTH);
    }

    #[test]
    fn rain_glyphs_scale_with_amount() {
        assert_eq!(rain_glyph(0.0), ' ');
        assert_eq!(rain_glyph(0.4), '.');
        assert_eq!(rain_glyph(3.0), '+');
        assert_eq!(rain_glyph(12.0), '#');
    }

    #[test]
    fn marker_row_splits_past_today_forecast() {
        let chart = render_window_chart(&window([25.0; 10], [0.0; 10]), 6);
        let when = chart.lines().last().unwrap();
        assert_eq!(when.matches('p').count(), PAST_DAYS);
        assert_eq!(when.matches('t').count(), 1);
        assert_eq!(when.matches('f').count(), 2);
    }
}
