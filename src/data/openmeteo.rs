//! Open-Meteo daily forecast integration.
//!
//! One GET against the forecast endpoint returns the whole 10-day window
//! (7 past days + 3 forecast days) as parallel arrays in a `daily` object.
//! The arrays are zipped into per-day observations and validated into a
//! `WeatherWindow` before anything downstream sees them.

use std::time::Duration;

use chrono::NaiveDate;
use reqwest::blocking::Client;
use serde::Deserialize;

use crate::domain::{DailyObservation, Location, WeatherWindow, FORECAST_DAYS, PAST_DAYS, WINDOW_DAYS};
use crate::error::AppError;

const BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
const DAILY_FIELDS: &str = "temperature_2m_max,precipitation_sum";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

pub struct OpenMeteoClient {
    client: Client,
}

impl OpenMeteoClient {
    pub fn new() -> Result<Self, AppError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| AppError::config(format!("Failed to build HTTP client: {e}")))?;
        Ok(Self { client })
    }

    /// Fetch the 10-day window for `location`.
    pub fn fetch_window(&self, location: &Location) -> Result<WeatherWindow, AppError> {
        let resp = self
            .client
            .get(BASE_URL)
            .query(&[
                ("latitude", location.latitude.to_string()),
                ("longitude", location.longitude.to_string()),
                ("timezone", location.timezone.clone()),
                ("daily", DAILY_FIELDS.to_string()),
                ("past_days", PAST_DAYS.to_string()),
                ("forecast_days", FORECAST_DAYS.to_string()),
            ])
            .send()
            .map_err(|e| AppError::network(format!("Weather request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(AppError::network(format!(
                "Weather request failed with status {}.",
                resp.status()
            )));
        }

        let body: ForecastResponse = resp
            .json()
            .map_err(|e| AppError::data_format(format!("Failed to parse weather response: {e}")))?;

        window_from_response(body)
    }
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    daily: Option<DailySeries>,
}

/// The `daily` object: parallel arrays, one entry per day.
///
/// Values are `Option` because the API emits `null` for days it cannot
/// resolve; the window invariant needs all 10, so nulls are hard errors here.
#[derive(Debug, Deserialize)]
struct DailySeries {
    time: Vec<String>,
    temperature_2m_max: Vec<Option<f64>>,
    precipitation_sum: Vec<Option<f64>>,
}

fn window_from_response(body: ForecastResponse) -> Result<WeatherWindow, AppError> {
    let daily = body
        .daily
        .ok_or_else(|| AppError::data_format("Weather response is missing the `daily` section."))?;

    if daily.temperature_2m_max.len() != daily.time.len()
        || daily.precipitation_sum.len() != daily.time.len()
    {
        return Err(AppError::data_format(format!(
            "Daily arrays disagree in length: {} dates, {} temperatures, {} precipitation sums.",
            daily.time.len(),
            daily.temperature_2m_max.len(),
            daily.precipitation_sum.len()
        )));
    }

    if daily.time.len() != WINDOW_DAYS {
        return Err(AppError::data_format(format!(
            "Expected {WINDOW_DAYS} days of data, got {}.",
            daily.time.len()
        )));
    }

    let mut days = Vec::with_capacity(daily.time.len());
    for ((raw_date, temp), rain) in daily
        .time
        .iter()
        .zip(&daily.temperature_2m_max)
        .zip(&daily.precipitation_sum)
    {
        let date = NaiveDate::parse_from_str(raw_date, "%Y-%m-%d").map_err(|e| {
            AppError::data_format(format!("Invalid date '{raw_date}' in weather response: {e}"))
        })?;
        let max_temperature_c =
            temp.ok_or_else(|| AppError::data_format(format!("Missing max temperature for {date}.")))?;
        let precipitation_mm =
            rain.ok_or_else(|| AppError::data_format(format!("Missing precipitation sum for {date}.")))?;
        if !max_temperature_c.is_finite() || !precipitation_mm.is_finite() {
            return Err(AppError::data_format(format!(
                "Non-finite weather value for {date}."
            )));
        }
        days.push(DailyObservation {
            date,
            max_temperature_c,
            precipitation_mm,
        });
    }

    WeatherWindow::new(days)
}
