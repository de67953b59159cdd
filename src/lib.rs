pub mod aggregator;
pub mod cli;
pub mod error;
pub mod interface;
pub mod models;
pub mod state;

pub use aggregator::NutritionAggregator;
pub use error::{NutritionError, Result};
pub use models::{DailyNutritionSummary, FoodLogEntry, NutritionTargets};
