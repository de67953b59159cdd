use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use diet_quality_rs::aggregator::NutritionAggregator;
use diet_quality_rs::cli::{Cli, Command, parse_day, resolve_targets};
use diet_quality_rs::error::Result;
use diet_quality_rs::interface::{
    HistoryRow, display_history, display_meals, display_summary, display_targets,
    write_history_csv, write_summary_json,
};
use diet_quality_rs::state::{FoodLog, SummaryCache, load_entries};

const CRATE_TARGET: &str = "diet_quality_rs";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Log to stderr, filtered by `RUST_LOG` when it is set.
fn init_logging(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .init();
}

/// Build the log filter from an optional `RUST_LOG` value.
///
/// A usable `RUST_LOG` replaces the default `diet_quality_rs=warn`; an empty or
/// invalid one falls back to it. `--verbose` always raises this crate to debug.
fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let env = env
        .map(str::trim)
        .filter(|spec| !spec.is_empty() && EnvFilter::try_new(spec).is_ok());

    let spec = match (env, verbose) {
        (Some(spec), true) => format!("{},{}=debug", spec, CRATE_TARGET),
        (Some(spec), false) => spec.to_string(),
        (None, true) => format!("{}=debug", CRATE_TARGET),
        (None, false) => format!("{}=warn", CRATE_TARGET),
    };
    EnvFilter::new(spec)
}

fn run(cli: Cli) -> Result<()> {
    let targets = resolve_targets(&cli)?;
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Summary { date, json } => {
            let aggregator = NutritionAggregator::new(targets);
            cmd_summary(&cli.file, &aggregator, date.as_deref(), json.as_deref())
        }
        Command::Targets => {
            display_targets(&targets);
            Ok(())
        }
        Command::History { days, csv } => {
            let aggregator = NutritionAggregator::new(targets);
            cmd_history(&cli.file, &aggregator, days, csv)
        }
    }
}

/// Load the food log, or `None` with a message if the file does not exist.
fn open_log(file_path: &Path) -> Result<Option<FoodLog>> {
    if !file_path.exists() {
        eprintln!("Food log not found: {}", file_path.display());
        eprintln!("Pass --file with the path to a food log JSON file.");
        return Ok(None);
    }

    let log = FoodLog::new(load_entries(file_path)?);
    info!(entries = log.len(), "Opened food log");
    Ok(Some(log))
}

/// Summarize one day and print the card.
fn cmd_summary(
    file_path: &Path,
    aggregator: &NutritionAggregator,
    date: Option<&str>,
    json: Option<&Path>,
) -> Result<()> {
    let Some(log) = open_log(file_path)? else {
        return Ok(());
    };

    let day = match date {
        Some(value) => parse_day(value)?,
        None => log.latest_day().unwrap_or_else(today),
    };

    let entries = log.entries_on(day);
    println!("{}: {} meals logged", day, entries.len());
    display_meals(&entries);

    let summary = aggregator.summarize(entries);
    display_summary(&summary);

    if let Some(path) = json {
        write_summary_json(&summary, path)?;
        println!("Wrote summary to {}", path.display());
    }

    Ok(())
}

/// Score every logged day (or the last `days` of them).
fn cmd_history(
    file_path: &Path,
    aggregator: &NutritionAggregator,
    days: Option<usize>,
    csv: Option<PathBuf>,
) -> Result<()> {
    let Some(log) = open_log(file_path)? else {
        return Ok(());
    };

    let mut logged_days = log.days();
    if let Some(limit) = days {
        let skip = logged_days.len().saturating_sub(limit);
        logged_days.drain(..skip);
    }

    let cache = SummaryCache::new();
    let rows: Vec<HistoryRow> = logged_days
        .iter()
        .map(|&day| {
            let summary = cache.get_or_compute(day, || aggregator.summarize(log.entries_on(day)));
            HistoryRow::from_summary(day, &summary)
        })
        .collect();

    display_history(&rows, log.logging_streak(today()));

    if let Some(path) = csv {
        write_history_csv(&rows, &path)?;
        println!("Wrote history to {}", path.display());
    }

    Ok(())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}
