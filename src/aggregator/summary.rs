use std::cmp::Ordering;

use tracing::debug;

use crate::aggregator::constants::MAX_HIGHLIGHTS;
use crate::aggregator::quality::{QualityInputs, score_diet_quality};
use crate::aggregator::status::{classify_limit, classify_target};
use crate::aggregator::totals::merge_entries;
use crate::models::{
    DailyNutritionSummary, DietQualityScore, FoodLogEntry, Highlight, MacroProgress,
    NutritionTargets,
};

/// Builds daily summaries against a fixed set of targets.
///
/// Holds no state beyond the targets, so one aggregator can summarize any
/// number of days, from any number of threads.
#[derive(Debug, Clone)]
pub struct NutritionAggregator {
    targets: NutritionTargets,
}

impl NutritionAggregator {
    pub fn new(targets: NutritionTargets) -> Self {
        Self { targets }
    }

    /// Summarize a day's entries. The caller is responsible for choosing the day.
    pub fn summarize<'a, I>(&self, entries: I) -> DailyNutritionSummary
    where
        I: IntoIterator<Item = &'a FoodLogEntry>,
    {
        let targets = &self.targets;
        let merged = merge_entries(entries);
        let totals = merged.totals;

        let calorie_macro = MacroProgress::new("Calories", totals.calories, targets.calorie_goal, "kcal");
        let protein_macro = MacroProgress::new(
            "Protein",
            totals.protein_grams,
            targets.protein_target_grams(),
            "g",
        );
        let carbohydrate_macro = MacroProgress::new(
            "Carbs",
            totals.carbohydrate_grams,
            targets.carbohydrate_target_grams(),
            "g",
        );
        let fat_macro = MacroProgress::new("Fat", totals.fat_grams, targets.fat_target_grams(), "g");

        let fiber_status = classify_target(totals.fiber_grams, targets.fiber_goal_grams);
        let added_sugar_status =
            classify_limit(totals.added_sugar_grams, targets.added_sugar_limit_grams);
        let sodium_status = classify_limit(totals.sodium_milligrams, targets.sodium_limit_milligrams);

        let diet_quality = score_diet_quality(&QualityInputs {
            protein_progress: protein_macro.progress(),
            carb_progress: carbohydrate_macro.progress(),
            fat_progress: fat_macro.progress(),
            fiber: totals.fiber_grams,
            fiber_target: targets.fiber_goal_grams,
            added_sugar: totals.added_sugar_grams,
            added_sugar_limit: targets.added_sugar_limit_grams,
            sodium: totals.sodium_milligrams,
            sodium_limit: targets.sodium_limit_milligrams,
            vegetable_servings: merged.vegetable_servings,
            vegetable_target: targets.vegetable_servings_target,
            fruit_servings: merged.fruit_servings,
            fruit_target: targets.fruit_servings_target,
        });

        debug!(
            calories = totals.calories,
            total = diet_quality.total,
            grade = %diet_quality.grade,
            has_confidence = merged.confidence.is_some(),
            "Summarized daily nutrition"
        );

        let highlights = highlight_messages(&diet_quality);

        DailyNutritionSummary {
            calorie_macro,
            protein_macro,
            carbohydrate_macro,
            fat_macro,
            fiber_status,
            added_sugar_status,
            sodium_status,
            vegetable_servings: merged.vegetable_servings,
            fruit_servings: merged.fruit_servings,
            vegetable_target: targets.vegetable_servings_target,
            fruit_target: targets.fruit_servings_target,
            confidence: merged.confidence,
            diet_quality,
            notes: merged.notes,
            highlights,
            totals,
        }
    }
}

/// The lowest-scoring components, ascending, as title/detail pairs.
///
/// The sort is stable, so equal scores keep component order.
pub fn highlight_messages(score: &DietQualityScore) -> Vec<Highlight> {
    let mut ranked: Vec<_> = score.components.iter().collect();
    ranked.sort_by(|a, b| a.score.partial_cmp(&b.score).unwrap_or(Ordering::Equal));

    ranked
        .into_iter()
        .take(MAX_HIGHLIGHTS)
        .map(|c| Highlight {
            title: c.name.clone(),
            detail: c.message.clone(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NutrientStatus, NutritionBreakdown, NutritionTotals, QualityComponent};
    use chrono::DateTime;

    fn component(name: &str, score: f64) -> QualityComponent {
        QualityComponent {
            name: name.to_string(),
            score,
            weight: 0.1,
            message: format!("{} message", name),
        }
    }

    #[test]
    fn test_highlights_take_two_lowest_ascending() {
        let score = DietQualityScore {
            total: 50,
            grade: crate::models::Grade::E,
            components: vec![
                component("A", 0.9),
                component("B", 0.3),
                component("C", 0.6),
                component("D", 0.1),
            ],
            top_opportunity: String::new(),
        };
        let highlights = highlight_messages(&score);

        assert_eq!(highlights.len(), 2);
        assert_eq!(highlights[0].title, "D");
        assert_eq!(highlights[1].title, "B");
        assert_eq!(highlights[1].detail, "B message");
    }

    #[test]
    fn test_summary_wires_targets_and_statuses() {
        let aggregator = NutritionAggregator::new(NutritionTargets::new(2000.0).unwrap());
        let date = DateTime::parse_from_rfc3339("2026-03-14T19:00:00+01:00").unwrap();
        let entry = FoodLogEntry::new(date, "Ramen").with_nutrition(NutritionBreakdown::new(
            NutritionTotals {
                calories: Some(900.0),
                sodium_milligrams: Some(2600.0),
                fiber_grams: Some(27.0),
                ..NutritionTotals::default()
            },
        ));
        let summary = aggregator.summarize(&[entry]);

        assert_eq!(summary.calorie_macro.consumed, 900.0);
        assert_eq!(summary.calorie_macro.target, 2000.0);
        assert_eq!(summary.calorie_macro.unit, "kcal");
        assert_eq!(summary.fiber_status.status, NutrientStatus::OnTrack);
        assert_eq!(summary.sodium_status.status, NutrientStatus::Excessive);
        assert_eq!(summary.sodium_status.target, 2300.0);
        assert_eq!(summary.vegetable_target, 2.5);
        assert_eq!(summary.fruit_target, 2.0);
    }
}
