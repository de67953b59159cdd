use tracing::{debug, warn};

use crate::aggregator::constants::{
    FRUIT_TAGS, GRAMS_PER_SERVING, MIN_ITEM_SERVING, VEGETABLE_TAGS,
};
use crate::models::{BreakdownItem, Confidence, DayTotals, FoodLogEntry, NutritionTotals};

/// Everything the merger extracts from a day's entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedTotals {
    pub totals: DayTotals,
    /// `None` unless some entry reported at least one confidence value.
    pub confidence: Option<Confidence>,
    pub notes: Vec<String>,
    pub vegetable_servings: f64,
    pub fruit_servings: f64,
}

/// Treat a missing or non-finite value as zero for summation.
fn summable(value: Option<f64>, field: &str) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            warn!(field, value = %v, "Ignoring non-finite nutrient value");
            0.0
        }
        None => 0.0,
    }
}

/// Add `value` to a running total, saturating at the largest finite float.
fn accumulate(total: &mut f64, value: Option<f64>, field: &str) {
    *total = (*total + summable(value, field)).clamp(f64::MIN, f64::MAX);
}

impl DayTotals {
    /// Add one breakdown's totals. Absent fields contribute nothing.
    pub fn add(&mut self, totals: &NutritionTotals) {
        accumulate(&mut self.calories, totals.calories, "calories");
        accumulate(&mut self.protein_grams, totals.protein_grams, "proteinGrams");
        accumulate(
            &mut self.carbohydrate_grams,
            totals.carbohydrate_grams,
            "carbohydrateGrams",
        );
        accumulate(&mut self.fat_grams, totals.fat_grams, "fatGrams");
        accumulate(&mut self.fiber_grams, totals.fiber_grams, "fiberGrams");
        accumulate(
            &mut self.added_sugar_grams,
            totals.added_sugar_grams,
            "addedSugarGrams",
        );
        accumulate(
            &mut self.sodium_milligrams,
            totals.sodium_milligrams,
            "sodiumMilligrams",
        );
        accumulate(
            &mut self.saturated_fat_grams,
            totals.saturated_fat_grams,
            "saturatedFatGrams",
        );
        accumulate(
            &mut self.unsaturated_fat_grams,
            totals.unsaturated_fat_grams,
            "unsaturatedFatGrams",
        );
    }
}

/// A confidence value usable in the max-merge; missing or non-finite counts as 0.
fn confidence_value(value: Option<f64>, field: &str) -> f64 {
    match value {
        Some(v) if v.is_finite() => v,
        Some(v) => {
            warn!(field, value = %v, "Ignoring non-finite confidence value");
            0.0
        }
        None => 0.0,
    }
}

fn max_field(current: Option<f64>, next: Option<f64>, field: &str) -> Option<f64> {
    Some(f64::max(
        confidence_value(current, field),
        confidence_value(next, field),
    ))
}

/// Element-wise maximum of two confidence records, absent fields counting as 0.
///
/// This is a max, not an average: the merged confidence for a field is the
/// best confidence any single entry reported for it. Keep it that way unless
/// the aggregation policy itself changes.
pub fn merge_confidence(current: &Confidence, next: &Confidence) -> Confidence {
    Confidence {
        overall: max_field(current.overall, next.overall, "overall"),
        calories: max_field(current.calories, next.calories, "calories"),
        protein: max_field(current.protein, next.protein, "protein"),
        carbohydrates: max_field(current.carbohydrates, next.carbohydrates, "carbohydrates"),
        fat: max_field(current.fat, next.fat, "fat"),
        fiber: max_field(current.fiber, next.fiber, "fiber"),
        added_sugar: max_field(current.added_sugar, next.added_sugar, "addedSugar"),
        sodium: max_field(current.sodium, next.sodium, "sodium"),
    }
}

/// Servings contributed by items carrying any of `tags`.
///
/// A numeric portion counts as `quantity / 100` servings (at least 0.25);
/// an item without one counts as a single serving.
pub fn produce_servings(items: &[BreakdownItem], tags: &[&str]) -> f64 {
    items
        .iter()
        .filter(|item| item.has_any_tag(tags))
        .map(|item| {
            match item
                .portion
                .as_ref()
                .and_then(|p| p.quantity)
                .filter(|q| q.is_finite())
            {
                Some(quantity) => f64::max(quantity / GRAMS_PER_SERVING, MIN_ITEM_SERVING),
                None => 1.0,
            }
        })
        .sum()
}

/// Fold a day's entries into totals, confidence, notes, and produce servings.
///
/// Entries with a breakdown contribute all nine totals; entries with only a
/// legacy estimate contribute calories and nothing else.
pub fn merge_entries<'a, I>(entries: I) -> MergedTotals
where
    I: IntoIterator<Item = &'a FoodLogEntry>,
{
    let mut merged = MergedTotals::default();
    let mut combined_confidence = Confidence::default();
    let mut has_confidence_data = false;

    for entry in entries {
        if let Some(nutrition) = &entry.nutrition {
            if nutrition.totals.is_empty() {
                debug!(entry = %entry.id, "Breakdown carries no totals");
            }
            merged.totals.add(&nutrition.totals);

            if let Some(conf) = &nutrition.confidence {
                if conf.has_any() {
                    has_confidence_data = true;
                }
                combined_confidence = merge_confidence(&combined_confidence, conf);
            }

            if let Some(notes) = &nutrition.notes {
                merged.notes.extend(notes.iter().cloned());
            }

            merged.vegetable_servings += produce_servings(&nutrition.items, &VEGETABLE_TAGS);
            merged.fruit_servings += produce_servings(&nutrition.items, &FRUIT_TAGS);
        } else if let Some(calories) = entry.estimated_calories {
            merged.totals.calories += calories as f64;
        }
    }

    if has_confidence_data {
        merged.confidence = Some(combined_confidence);
    }

    merged
}
