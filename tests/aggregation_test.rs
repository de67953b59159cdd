#[macro_use]
extern crate assert_float_eq;

use chrono::DateTime;

use diet_quality_rs::aggregator::{
    NutritionAggregator, QualityInputs, capped_score, classify_limit, classify_target,
    inverse_score, letter_grade, ratio, score_diet_quality,
};
use diet_quality_rs::models::{
    BreakdownItem, Confidence, FoodLogEntry, NutrientStatus, NutritionBreakdown,
    NutritionTargets, NutritionTotals,
};
use diet_quality_rs::state::FoodLog;

fn entry_at(timestamp: &str, summary: &str) -> FoodLogEntry {
    FoodLogEntry::new(DateTime::parse_from_rfc3339(timestamp).unwrap(), summary)
}

fn aggregator(goal: f64) -> NutritionAggregator {
    NutritionAggregator::new(NutritionTargets::new(goal).unwrap())
}

#[test]
fn test_legacy_estimates_sum_to_calories_only() {
    let estimates = [320, 0, 875, 410];
    let entries: Vec<FoodLogEntry> = estimates
        .iter()
        .map(|&kcal| entry_at("2026-03-14T12:00:00+00:00", "Meal").with_estimated_calories(kcal))
        .collect();

    let summary = aggregator(2000.0).summarize(&entries);

    assert_eq!(summary.calorie_macro.consumed, 1605.0);
    for progress in summary.macros() {
        assert_eq!(progress.consumed, 0.0, "{} should be untouched", progress.label);
    }
    assert_eq!(summary.fiber_status.consumed, 0.0);
    assert_eq!(summary.sodium_status.consumed, 0.0);
}

#[test]
fn test_mixed_entries_sum_all_nine_fields() {
    let totals = NutritionTotals {
        calories: Some(500.0),
        protein_grams: Some(30.0),
        carbohydrate_grams: Some(60.0),
        fat_grams: Some(15.0),
        fiber_grams: Some(8.0),
        added_sugar_grams: Some(5.0),
        sodium_milligrams: Some(700.0),
        saturated_fat_grams: Some(4.0),
        unsaturated_fat_grams: Some(9.0),
    };
    let entries = vec![
        entry_at("2026-03-14T08:00:00+00:00", "Breakfast")
            .with_nutrition(NutritionBreakdown::new(totals.clone())),
        entry_at("2026-03-14T12:00:00+00:00", "Lunch")
            .with_nutrition(NutritionBreakdown::new(totals)),
        entry_at("2026-03-14T15:00:00+00:00", "Coffee").with_estimated_calories(90),
    ];

    let summary = aggregator(2000.0).summarize(&entries);

    assert_eq!(summary.totals.calories, 1090.0);
    assert_eq!(summary.totals.protein_grams, 60.0);
    assert_eq!(summary.totals.saturated_fat_grams, 8.0);
    assert_eq!(summary.totals.unsaturated_fat_grams, 18.0);
    assert_eq!(summary.sodium_status.consumed, 1400.0);
    assert_eq!(summary.fiber_status.consumed, 16.0);
}

#[test]
fn test_item_totals_are_not_double_counted() {
    let mut item = BreakdownItem::new("Apple");
    item.totals.calories = Some(95.0);
    item.tags = Some(vec!["fruit".to_string()]);

    let breakdown = NutritionBreakdown {
        totals: NutritionTotals {
            calories: Some(95.0),
            ..NutritionTotals::default()
        },
        items: vec![item],
        ..NutritionBreakdown::default()
    };
    let entries = vec![entry_at("2026-03-14T10:00:00+00:00", "Apple").with_nutrition(breakdown)];
    let summary = aggregator(2000.0).summarize(&entries);

    assert_eq!(summary.calorie_macro.consumed, 95.0);
    assert_eq!(summary.fruit_servings, 1.0);
}

#[test]
fn test_confidence_none_iff_no_values_reported() {
    let without = vec![
        entry_at("2026-03-14T08:00:00+00:00", "A").with_estimated_calories(300),
        entry_at("2026-03-14T09:00:00+00:00", "B").with_nutrition(NutritionBreakdown {
            confidence: Some(Confidence::default()),
            ..NutritionBreakdown::default()
        }),
    ];
    assert!(aggregator(2000.0).summarize(&without).confidence.is_none());

    let reported = [0.35, 0.8, 0.6];
    let with: Vec<FoodLogEntry> = reported
        .iter()
        .map(|&fiber| {
            entry_at("2026-03-14T12:00:00+00:00", "C").with_nutrition(NutritionBreakdown {
                confidence: Some(Confidence {
                    fiber: Some(fiber),
                    ..Confidence::default()
                }),
                ..NutritionBreakdown::default()
            })
        })
        .collect();
    let conf = aggregator(2000.0).summarize(&with).confidence.unwrap();
    assert_eq!(conf.fiber, Some(0.8));
    assert_eq!(conf.overall, Some(0.0));
}

#[test]
fn test_degenerate_targets_use_neutral_values() {
    for target in [0.0, -1.0, -2300.0] {
        assert_eq!(ratio(50.0, target), 0.0);
        assert_eq!(capped_score(50.0, target), 0.0);
        assert_eq!(inverse_score(50.0, target), 1.0);
        assert_eq!(classify_target(50.0, target).status, NutrientStatus::Inadequate);
        assert_eq!(classify_limit(50.0, target).status, NutrientStatus::Inadequate);
    }
}

#[test]
fn test_overflowing_sodium_is_excessive() {
    let salty = || {
        entry_at("2026-03-14T12:00:00+00:00", "Brine").with_nutrition(NutritionBreakdown::new(
            NutritionTotals {
                sodium_milligrams: Some(1e308),
                ..NutritionTotals::default()
            },
        ))
    };
    let summary = aggregator(2000.0).summarize(&[salty(), salty()]);

    assert_eq!(summary.sodium_status.consumed, f64::MAX);
    assert_eq!(summary.sodium_status.status, NutrientStatus::Excessive);
}

#[test]
fn test_tiny_limit_is_excessive() {
    let targets = NutritionTargets::new(2000.0).unwrap().with_sodium_limit(1e-320);
    let entries = vec![
        entry_at("2026-03-14T12:00:00+00:00", "Soup").with_nutrition(NutritionBreakdown::new(
            NutritionTotals {
                sodium_milligrams: Some(5000.0),
                ..NutritionTotals::default()
            },
        )),
    ];
    let summary = NutritionAggregator::new(targets).summarize(&entries);

    assert_eq!(summary.sodium_status.status, NutrientStatus::Excessive);
    let sodium = summary
        .diet_quality
        .components
        .iter()
        .find(|c| c.name == "Sodium")
        .unwrap();
    assert_eq!(sodium.score, 0.0);
}

#[test]
fn test_total_always_in_range() {
    let progress = [0.0, 0.3, 0.8, 1.0, 1.2, 1.5, 3.0, 10.0];
    for &p in &progress {
        for &consumed in &[0.0, 10.0, 50.0, 500.0, 1e6] {
            let inputs = QualityInputs {
                protein_progress: p,
                carb_progress: p,
                fat_progress: p,
                fiber: consumed,
                fiber_target: 28.0,
                added_sugar: consumed,
                added_sugar_limit: 50.0,
                sodium: consumed * 10.0,
                sodium_limit: 2300.0,
                vegetable_servings: p * 2.5,
                vegetable_target: 2.5,
                fruit_servings: p * 2.0,
                fruit_target: 2.0,
            };
            let score = score_diet_quality(&inputs);

            assert!(score.total <= 100);
            assert_eq!(score.grade, letter_grade(score.total));
            for component in &score.components {
                assert!(
                    (0.0..=1.0).contains(&component.score),
                    "{} out of range: {}",
                    component.name,
                    component.score
                );
            }
        }
    }
}

#[test]
fn test_grade_is_monotonic() {
    let grades: Vec<_> = (0..=100u8).map(letter_grade).collect();
    // Grade derives Ord with A < E, so higher totals never yield a worse grade.
    for window in grades.windows(2) {
        assert!(window[1] <= window[0]);
    }
}

#[test]
fn test_summarize_one_day_from_log() {
    let breakfast = NutritionTotals {
        calories: Some(420.0),
        fiber_grams: Some(11.0),
        ..NutritionTotals::default()
    };
    let log = FoodLog::new(vec![
        entry_at("2026-03-13T21:00:00-05:00", "Yesterday dinner").with_estimated_calories(800),
        entry_at("2026-03-14T07:30:00-05:00", "Breakfast")
            .with_nutrition(NutritionBreakdown::new(breakfast)),
        entry_at("2026-03-14T13:00:00-05:00", "Lunch").with_estimated_calories(600),
    ]);

    let day = log.latest_day().unwrap();
    let summary = aggregator(1800.0).summarize(log.entries_on(day));

    assert_eq!(summary.calorie_macro.consumed, 1020.0);
    assert_float_absolute_eq!(summary.calorie_macro.progress(), 1020.0 / 1800.0, 1e-12);
    assert_float_absolute_eq!(summary.fiber_status.target, 25.2, 1e-9);
}
