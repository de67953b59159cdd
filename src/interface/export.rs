use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use serde::Serialize;

use crate::error::Result;
use crate::models::{DailyNutritionSummary, Grade};

/// One line of the per-day history.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryRow {
    pub date: NaiveDate,
    pub calories: f64,
    pub calorie_goal: f64,
    pub total: u8,
    pub grade: Grade,
    pub top_opportunity: String,
}

impl HistoryRow {
    pub fn from_summary(date: NaiveDate, summary: &DailyNutritionSummary) -> Self {
        Self {
            date,
            calories: summary.calorie_macro.consumed,
            calorie_goal: summary.calorie_macro.target,
            total: summary.diet_quality.total,
            grade: summary.diet_quality.grade,
            top_opportunity: summary.diet_quality.top_opportunity.clone(),
        }
    }
}

/// Write history rows to a CSV file.
pub fn write_history_csv(rows: &[HistoryRow], path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "date",
        "calories",
        "calorie_goal",
        "score",
        "grade",
        "top_opportunity",
    ])?;

    for row in rows {
        wtr.write_record([
            row.date.to_string(),
            format!("{:.0}", row.calories),
            format!("{:.0}", row.calorie_goal),
            row.total.to_string(),
            row.grade.to_string(),
            row.top_opportunity.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write a summary as pretty-printed JSON.
pub fn write_summary_json(summary: &DailyNutritionSummary, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(summary)?;
    fs::write(path, json)?;
    Ok(())
}
