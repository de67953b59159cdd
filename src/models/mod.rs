mod breakdown;
mod entry;
mod summary;
mod targets;

pub use breakdown::{BreakdownItem, Confidence, NutritionBreakdown, NutritionTotals, Portion};
pub use entry::FoodLogEntry;
pub use summary::{
    DailyNutritionSummary, DayTotals, DietQualityScore, Grade, Highlight, MacroProgress,
    NutrientReading, NutrientStatus, QualityComponent,
};
pub use targets::{
    MacroSplit, NutritionTargets, TargetsConfig, default_added_sugar_limit, default_fiber_goal,
};
