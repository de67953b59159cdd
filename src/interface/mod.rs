pub mod export;
pub mod render;

pub use export::{HistoryRow, write_history_csv, write_summary_json};
pub use render::{display_history, display_meals, display_summary, display_targets};
