//! Command-line parsing for the garden watering advisor.
//!
//! The goal of this module is to keep **argument parsing** and **command dispatch**
//! separate from the fetch/policy/rendering code.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "irrigate", version, about = "Garden watering advisor (Open-Meteo based)")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// CLI subcommands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Fetch the weather window, decide, and write the text report.
    Report(RunArgs),
    /// Fetch and decide, but only print the conclusion line (useful for scripting).
    Check(RunArgs),
}

/// Common options for reporting and checking.
#[derive(Debug, Parser, Clone)]
pub struct RunArgs {
    /// Latitude of the garden.
    #[arg(long, env = "GARDEN_LATITUDE", default_value_t = 43.66528)]
    pub latitude: f64,

    /// Longitude of the garden.
    #[arg(long, env = "GARDEN_LONGITUDE", default_value_t = 1.3775)]
    pub longitude: f64,

    /// IANA timezone the API uses to bound "today".
    #[arg(long, env = "GARDEN_TIMEZONE", default_value = "Europe/Paris")]
    pub timezone: String,

    /// Location label shown in the report header.
    #[arg(long, default_value = "Beauzelle")]
    pub label: String,

    /// Where to write the report.
    #[arg(short = 'o', long, env = "GARDEN_REPORT_PATH", default_value = "irrigation_report.txt")]
    pub out: PathBuf,

    /// Past-week rainfall (mm) below which the soil counts as dry.
    #[arg(long, default_value_t = 5.0)]
    pub min_rain_mm: f64,

    /// Max temperature (C) strictly above which a day counts as hot.
    #[arg(long, default_value_t = 28.0)]
    pub hot_day_threshold_c: f64,

    /// Hot days in the window that trigger heat concern.
    #[arg(long, default_value_t = 2)]
    pub hot_day_count: usize,

    /// Forecast rainfall (mm over the next 3 days) above which watering is skipped.
    #[arg(long, default_value_t = 15.0)]
    pub forecast_rain_override_mm: f64,

    /// Include the ASCII weather chart in the report (enabled by default).
    #[arg(long, default_value_t = true)]
    pub plot: bool,

    /// Omit the ASCII weather chart.
    #[arg(long)]
    pub no_plot: bool,

    /// Chart height (temperature rows).
    #[arg(long, default_value_t = 8)]
    pub height: usize,

    /// Also export the window, signals, and decision as JSON.
    #[arg(long, value_name = "JSON")]
    pub export: Option<PathBuf>,
}
