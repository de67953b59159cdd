mod cache;
mod log;
mod persistence;

pub use cache::SummaryCache;
pub use log::FoodLog;
pub use persistence::{load_entries, load_targets_config, save_entries};
