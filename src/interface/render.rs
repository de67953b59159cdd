use crate::interface::export::HistoryRow;
use crate::models::{
    DailyNutritionSummary, FoodLogEntry, MacroProgress, NutrientReading, NutritionTargets,
};

/// Width of the text progress bars.
const BAR_WIDTH: usize = 20;

/// Progress as a display percentage, 0 for anything non-finite.
fn percent(progress: f64) -> f64 {
    if progress.is_finite() {
        (progress * 100.0).min(f64::MAX)
    } else {
        0.0
    }
}

fn progress_bar(progress: f64) -> String {
    let clamped = if progress.is_finite() {
        progress.clamp(0.0, 1.0)
    } else {
        0.0
    };
    let filled = (clamped * BAR_WIDTH as f64).round() as usize;
    format!("[{}{}]", "#".repeat(filled), "-".repeat(BAR_WIDTH - filled))
}

fn macro_line(progress: &MacroProgress) {
    println!(
        "  {:<9} {} {:>6.0} / {:<6.0} {:<4} {:>4.0}%",
        progress.label,
        progress_bar(progress.progress()),
        progress.consumed,
        progress.target,
        progress.unit,
        percent(progress.progress())
    );
}

fn nutrient_line(name: &str, reading: &NutrientReading, unit: &str, kind: &str) {
    println!(
        "  {:<12} {:>7.0} / {:<7.0} {:<3} ({} {})",
        name, reading.consumed, reading.target, unit, kind, reading.status
    );
}

/// One line per logged meal: time, meal type, summary, and calories.
fn meal_line(entry: &FoodLogEntry) -> String {
    // A breakdown replaces the legacy estimate even when it has no calorie total.
    let calories = match &entry.nutrition {
        Some(nutrition) => nutrition.totals.calories,
        None => entry.estimated_calories.map(|kcal| kcal as f64),
    };
    let calories = calories
        .filter(|kcal| kcal.is_finite())
        .map(|kcal| format!("{:.0} kcal", kcal))
        .unwrap_or_else(|| "no estimate".to_string());

    format!(
        "  {}  {:<9}  {} ({})",
        entry.date.format("%H:%M"),
        entry.meal_type.as_deref().unwrap_or("Meal"),
        entry.summary,
        calories
    )
}

/// Display the meals logged on one day.
pub fn display_meals(entries: &[&FoodLogEntry]) {
    for entry in entries {
        println!("{}", meal_line(entry));
    }
}

/// Display a daily summary as a text card.
pub fn display_summary(summary: &DailyNutritionSummary) {
    println!();
    println!("=== Today's Nutrition ===");
    println!();

    macro_line(&summary.calorie_macro);
    for progress in summary.macros() {
        macro_line(progress);
    }

    println!();
    nutrient_line("Fiber", &summary.fiber_status, "g", "goal,");
    nutrient_line("Added sugar", &summary.added_sugar_status, "g", "limit,");
    nutrient_line("Sodium", &summary.sodium_status, "mg", "limit,");

    println!();
    println!(
        "  Vegetables: {:.1} / {:.1} servings   Fruit: {:.1} / {:.1} servings",
        summary.vegetable_servings,
        summary.vegetable_target,
        summary.fruit_servings,
        summary.fruit_target
    );

    if let Some(overall) = summary.confidence.as_ref().and_then(|c| c.overall) {
        println!("  Estimate confidence: {:.0}%", percent(overall));
    }

    let quality = &summary.diet_quality;
    println!();
    println!("--- Diet Quality: {} ({}) ---", quality.total, quality.grade);
    for component in &quality.components {
        println!(
            "  {:<14} {:>4.0}% (weight {:.2})  {}",
            component.name,
            percent(component.score),
            component.weight,
            component.message
        );
    }

    if !summary.highlights.is_empty() {
        println!();
        println!("--- Focus ---");
        for highlight in &summary.highlights {
            println!("  {}: {}", highlight.title, highlight.detail);
        }
    }

    if !summary.notes.is_empty() {
        println!();
        println!("--- Notes ---");
        for note in &summary.notes {
            println!("  - {}", note);
        }
    }

    println!();
}

/// Display resolved targets, including the derived macro grams.
pub fn display_targets(targets: &NutritionTargets) {
    println!();
    println!("=== Targets ===");
    println!();
    println!("  Calories:      {:.0} kcal", targets.calorie_goal);
    println!(
        "  Protein:       {:.0} g ({:.0}%)",
        targets.protein_target_grams(),
        targets.macros.protein * 100.0
    );
    println!(
        "  Carbs:         {:.0} g ({:.0}%)",
        targets.carbohydrate_target_grams(),
        targets.macros.carbohydrates * 100.0
    );
    println!(
        "  Fat:           {:.0} g ({:.0}%)",
        targets.fat_target_grams(),
        targets.macros.fat * 100.0
    );
    println!("  Fiber goal:    {:.1} g", targets.fiber_goal_grams);
    println!("  Added sugar:   {:.1} g max", targets.added_sugar_limit_grams);
    println!("  Sodium:        {:.0} mg max", targets.sodium_limit_milligrams);
    println!(
        "  Produce:       {:.1} vegetable / {:.1} fruit servings",
        targets.vegetable_servings_target, targets.fruit_servings_target
    );
    println!();
}

/// Display per-day history in a table.
pub fn display_history(rows: &[HistoryRow], streak: u32) {
    if rows.is_empty() {
        println!("No logged days.");
        return;
    }

    println!();
    println!("=== History ({} days) ===", rows.len());
    println!();

    for row in rows {
        println!(
            "  {}  {:>5.0} / {:<5.0} kcal  {:>3} {}  {}",
            row.date, row.calories, row.calorie_goal, row.total, row.grade, row.top_opportunity
        );
    }

    println!();
    println!("Logging streak: {} day{}", streak, if streak == 1 { "" } else { "s" });
    println!();
}
