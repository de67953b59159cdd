use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::Confidence;

/// Consumed vs. target for one macro (or calories).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroProgress {
    pub label: String,
    pub consumed: f64,
    pub target: f64,
    pub unit: String,
}

impl MacroProgress {
    pub fn new(label: &str, consumed: f64, target: f64, unit: &str) -> Self {
        Self {
            label: label.to_string(),
            consumed,
            target,
            unit: unit.to_string(),
        }
    }

    /// `consumed / target`, or 0 when the target is not positive.
    ///
    /// Same rules as [`crate::aggregator::ratio`], overflow included.
    #[inline]
    pub fn progress(&self) -> f64 {
        crate::aggregator::ratio(self.consumed, self.target)
    }
}

/// Qualitative state of a nutrient relative to its target or limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NutrientStatus {
    Inadequate,
    OnTrack,
    Excessive,
}

impl NutrientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            NutrientStatus::Inadequate => "low",
            NutrientStatus::OnTrack => "on track",
            NutrientStatus::Excessive => "high",
        }
    }
}

impl fmt::Display for NutrientStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A classified nutrient together with the raw values it was derived from.
///
/// `target` is a goal for fiber and a limit for added sugar and sodium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutrientReading {
    pub status: NutrientStatus,
    pub consumed: f64,
    pub target: f64,
}

/// Day-level sums of every tracked nutrient, with absent fields counted as zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DayTotals {
    pub calories: f64,
    pub protein_grams: f64,
    pub carbohydrate_grams: f64,
    pub fat_grams: f64,
    pub fiber_grams: f64,
    pub added_sugar_grams: f64,
    pub sodium_milligrams: f64,
    pub saturated_fat_grams: f64,
    pub unsaturated_fat_grams: f64,
}

/// Letter grade derived from the 0-100 diet quality total.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    E,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One weighted sub-score of the diet quality total.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QualityComponent {
    pub name: String,
    /// In `[0, 1]`.
    pub score: f64,
    pub weight: f64,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DietQualityScore {
    /// Clamped to `[0, 100]`.
    pub total: u8,
    pub grade: Grade,
    pub components: Vec<QualityComponent>,
    pub top_opportunity: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Highlight {
    pub title: String,
    pub detail: String,
}

/// Consolidated nutrition picture for one day of logged meals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyNutritionSummary {
    pub calorie_macro: MacroProgress,
    pub protein_macro: MacroProgress,
    pub carbohydrate_macro: MacroProgress,
    pub fat_macro: MacroProgress,
    pub fiber_status: NutrientReading,
    pub added_sugar_status: NutrientReading,
    pub sodium_status: NutrientReading,
    pub vegetable_servings: f64,
    pub fruit_servings: f64,
    pub vegetable_target: f64,
    pub fruit_target: f64,
    /// `None` when no entry reported any confidence value.
    pub confidence: Option<Confidence>,
    pub diet_quality: DietQualityScore,
    pub notes: Vec<String>,
    pub highlights: Vec<Highlight>,
    pub totals: DayTotals,
}

impl DailyNutritionSummary {
    /// The three macros in display order.
    pub fn macros(&self) -> [&MacroProgress; 3] {
        [&self.protein_macro, &self.carbohydrate_macro, &self.fat_macro]
    }
}
