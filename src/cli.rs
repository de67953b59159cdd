use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

use crate::error::{NutritionError, Result};
use crate::models::{NutritionTargets, TargetsConfig};
use crate::state::load_targets_config;

/// Default calorie goal when neither the flag nor a targets file sets one.
pub const DEFAULT_CALORIE_GOAL: f64 = 2000.0;

/// DietQuality — Summarize logged meals against nutrition targets and score the day.
#[derive(Parser, Debug)]
#[command(name = "diet_quality")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food log JSON file.
    #[arg(short, long, default_value = "food_log.json")]
    pub file: PathBuf,

    /// Path to a JSON file with target overrides.
    #[arg(short, long)]
    pub targets: Option<PathBuf>,

    /// Daily calorie goal (overrides the targets file).
    #[arg(short, long)]
    pub calorie_goal: Option<f64>,

    /// Enable debug logging on stderr.
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Summarize one day's meals.
    Summary {
        /// Day to summarize (YYYY-MM-DD). Defaults to the latest logged day.
        #[arg(long)]
        date: Option<String>,

        /// Also write the summary as JSON to this path.
        #[arg(long)]
        json: Option<PathBuf>,
    },

    /// Show resolved nutrition targets.
    Targets,

    /// Score each logged day.
    History {
        /// Only include the most recent N logged days.
        #[arg(long)]
        days: Option<usize>,

        /// Also write the history as CSV to this path.
        #[arg(long)]
        csv: Option<PathBuf>,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Summary {
            date: None,
            json: None,
        }
    }
}

/// Parse a `YYYY-MM-DD` day argument.
pub fn parse_day(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|e| NutritionError::InvalidDate(format!("{}: {}", value, e)))
}

/// Resolve targets from the optional config file and calorie goal flag.
pub fn resolve_targets(cli: &Cli) -> Result<NutritionTargets> {
    let mut config = match &cli.targets {
        Some(path) => load_targets_config(path)?,
        None => TargetsConfig::default(),
    };

    if let Some(goal) = cli.calorie_goal {
        config.calorie_goal = Some(goal);
    }

    config.into_targets(DEFAULT_CALORIE_GOAL)
}
