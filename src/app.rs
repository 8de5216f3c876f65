//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - parses CLI arguments
//! - runs the fetch/decide pipeline
//! - renders and writes the report
//! - prints the conclusion

use clap::Parser;

use crate::cli::{Command, RunArgs};
use crate::domain::{Location, RunConfig, Thresholds};
use crate::error::AppError;

pub mod pipeline;

/// Entry point for the `irrigate` binary.
pub fn run() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    env_logger::init();

    // We want a bare `irrigate` (the cron entry) to behave like `irrigate report`.
    //
    // Clap requires a subcommand name, so we do a small, explicit rewrite of the
    // argv list before parsing. This preserves a clean clap structure while
    // keeping the scheduled invocation flag-free.
    let argv = rewrite_args(std::env::args().collect());
    let cli = crate::cli::Cli::parse_from(argv);

    match cli.command {
        Command::Report(args) => handle_run(args, OutputMode::Full),
        Command::Check(args) => handle_run(args, OutputMode::ConclusionOnly),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum OutputMode {
    Full,
    ConclusionOnly,
}

fn handle_run(args: RunArgs, mode: OutputMode) -> Result<(), AppError> {
    let config = run_config_from_args(&args);
    let run = pipeline::run_advice(&config)?;

    match mode {
        OutputMode::Full => {
            crate::io::write_report(&config.report_path, &run.report)?;
            log::info!("Report written to {}", config.report_path.display());
            println!("{}", run.report);
        }
        OutputMode::ConclusionOnly => {
            println!("{}", crate::report::conclusion_line(&run.decision));
        }
    }

    // Optional export.
    if let Some(path) = &config.export_path {
        crate::io::write_advice_json(
            path,
            &run.window,
            &run.signals,
            &run.decision,
            &config.location,
            &config.thresholds,
        )?;
        log::info!("Advice JSON written to {}", path.display());
    }

    Ok(())
}

pub fn run_config_from_args(args: &RunArgs) -> RunConfig {
    RunConfig {
        location: Location {
            latitude: args.latitude,
            longitude: args.longitude,
            timezone: args.timezone.clone(),
            label: args.label.clone(),
        },
        thresholds: Thresholds {
            min_rain_mm: args.min_rain_mm,
            hot_day_threshold_c: args.hot_day_threshold_c,
            hot_day_count: args.hot_day_count,
            forecast_rain_override_mm: args.forecast_rain_override_mm,
        },
        report_path: args.out.clone(),
        plot: args.plot && !args.no_plot,
        plot_height: args.height,
        export_path: args.export.clone(),
    }
}

/// Rewrite argv so `irrigate` defaults to `irrigate report`.
///
/// Rules:
/// - `irrigate`                      -> `irrigate report`
/// - `irrigate --latitude 48.0 ...`  -> `irrigate report --latitude 48.0 ...`
/// - `irrigate --help/--version/-h`  -> unchanged (show top-level help/version)
fn rewrite_args(mut argv: Vec<String>) -> Vec<String> {
    let Some(arg1) = argv.get(1).cloned() else {
        argv.push("report".to_string());
        return argv;
    };

    let is_top_level_help_or_version = matches!(
        arg1.as_str(),
        "-h" | "--help" | "-V" | "--version" | "help"
    );
    if is_top_level_help_or_version {
        return argv;
    }

    let is_subcommand = matches!(arg1.as_str(), "report" | "check");
    if is_subcommand {
        return argv;
    }

    // If the first token is a flag, treat it as "report flags".
    if arg1.starts_with('-') {
        argv.insert(1, "report".to_string());
        return argv;
    }

    // Otherwise, leave as-is.
    argv
}
