use std::collections::HashMap;
use std::sync::Mutex;

use chrono::NaiveDate;

use crate::models::DailyNutritionSummary;

/// Caller-owned memo of computed summaries, keyed by day.
///
/// The aggregator never touches this; whoever owns the cache decides when a
/// day's entries changed and calls [`SummaryCache::invalidate`].
#[derive(Debug, Default)]
pub struct SummaryCache {
    storage: Mutex<HashMap<NaiveDate, DailyNutritionSummary>>,
}

impl SummaryCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<NaiveDate, DailyNutritionSummary>> {
        // Every critical section is a single map call, so poisoning is ignored.
        self.storage.lock().unwrap_or_else(|e| e.into_inner())
    }

    pub fn get(&self, day: NaiveDate) -> Option<DailyNutritionSummary> {
        self.lock().get(&day).cloned()
    }

    pub fn insert(&self, day: NaiveDate, summary: DailyNutritionSummary) {
        self.lock().insert(day, summary);
    }

    /// Return the cached summary for `day`, computing and storing it on a miss.
    ///
    /// `compute` runs without the lock held.
    pub fn get_or_compute<F>(&self, day: NaiveDate, compute: F) -> DailyNutritionSummary
    where
        F: FnOnce() -> DailyNutritionSummary,
    {
        if let Some(hit) = self.get(day) {
            return hit;
        }
        let summary = compute();
        self.insert(day, summary.clone());
        summary
    }

    pub fn invalidate(&self, day: NaiveDate) -> bool {
        self.lock().remove(&day).is_some()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }
}
