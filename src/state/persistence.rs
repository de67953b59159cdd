use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::Result;
use crate::models::{FoodLogEntry, TargetsConfig};

/// Load food log entries from a JSON array.
pub fn load_entries<P: AsRef<Path>>(path: P) -> Result<Vec<FoodLogEntry>> {
    let content = fs::read_to_string(path.as_ref())?;
    let entries: Vec<FoodLogEntry> = serde_json::from_str(&content)?;
    debug!(count = entries.len(), path = %path.as_ref().display(), "Loaded food log");
    Ok(entries)
}

/// Save food log entries as a JSON array, oldest first.
pub fn save_entries<P: AsRef<Path>>(path: P, entries: &[FoodLogEntry]) -> Result<()> {
    let mut sorted: Vec<&FoodLogEntry> = entries.iter().collect();
    sorted.sort_by_key(|e| e.date);

    let json = serde_json::to_string_pretty(&sorted)?;
    fs::write(path, json)?;
    Ok(())
}

/// Load target overrides from a JSON object.
pub fn load_targets_config<P: AsRef<Path>>(path: P) -> Result<TargetsConfig> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}
