pub mod constants;
pub mod quality;
pub mod status;
pub mod summary;
pub mod totals;

pub use quality::{
    ComponentKind, QualityInputs, average_normalized, capped_score, inverse_score, letter_grade,
    normalize, score_diet_quality,
};
pub use status::{classify, classify_limit, classify_target, ratio};
pub use summary::{NutritionAggregator, highlight_messages};
pub use totals::{MergedTotals, merge_confidence, merge_entries, produce_servings};
