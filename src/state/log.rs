use std::collections::BTreeSet;

use chrono::{Days, NaiveDate};

use crate::models::FoodLogEntry;

/// A user's food log, in the order entries were recorded.
pub struct FoodLog {
    entries: Vec<FoodLogEntry>,
}

impl FoodLog {
    pub fn new(entries: Vec<FoodLogEntry>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries whose local calendar date is `date`, in log order.
    pub fn entries_on(&self, date: NaiveDate) -> Vec<&FoodLogEntry> {
        self.entries
            .iter()
            .filter(|e| e.local_date() == date)
            .collect()
    }

    /// Distinct logged dates, ascending.
    pub fn days(&self) -> Vec<NaiveDate> {
        self.day_set().into_iter().collect()
    }

    /// Most recent logged date.
    pub fn latest_day(&self) -> Option<NaiveDate> {
        self.day_set().into_iter().next_back()
    }

    fn day_set(&self) -> BTreeSet<NaiveDate> {
        self.entries.iter().map(|e| e.local_date()).collect()
    }

    /// Consecutive logged days ending today, or ending yesterday when nothing
    /// is logged yet today. Zero if neither day has an entry.
    pub fn logging_streak(&self, today: NaiveDate) -> u32 {
        let days = self.day_set();

        let mut cursor = if days.contains(&today) {
            today
        } else {
            match today.checked_sub_days(Days::new(1)) {
                Some(yesterday) if days.contains(&yesterday) => yesterday,
                _ => return 0,
            }
        };

        let mut streak = 0;
        while days.contains(&cursor) {
            streak += 1;
            match cursor.checked_sub_days(Days::new(1)) {
                Some(previous) => cursor = previous,
                None => break,
            }
        }
        streak
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::DateTime;

    fn entry_at(timestamp: &str) -> FoodLogEntry {
        FoodLogEntry::new(DateTime::parse_from_rfc3339(timestamp).unwrap(), "Meal")
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn sample_log() -> FoodLog {
        FoodLog::new(vec![
            entry_at("2026-03-12T08:00:00+00:00"),
            entry_at("2026-03-13T08:00:00+00:00"),
            entry_at("2026-03-14T12:00:00+00:00"),
            entry_at("2026-03-14T19:00:00+00:00"),
            entry_at("2026-03-10T19:00:00+00:00"),
        ])
    }

    #[test]
    fn test_entries_on_filters_by_local_date() {
        let log = sample_log();
        assert_eq!(log.entries_on(day(2026, 3, 14)).len(), 2);
        assert_eq!(log.entries_on(day(2026, 3, 11)).len(), 0);
    }

    #[test]
    fn test_days_sorted_and_distinct() {
        let log = sample_log();
        assert_eq!(
            log.days(),
            vec![
                day(2026, 3, 10),
                day(2026, 3, 12),
                day(2026, 3, 13),
                day(2026, 3, 14)
            ]
        );
        assert_eq!(log.latest_day(), Some(day(2026, 3, 14)));
    }

    #[test]
    fn test_streak_counts_back_from_today() {
        let log = sample_log();
        assert_eq!(log.logging_streak(day(2026, 3, 14)), 3);
    }

    #[test]
    fn test_streak_survives_until_end_of_today() {
        let log = sample_log();
        assert_eq!(log.logging_streak(day(2026, 3, 15)), 3);
    }

    #[test]
    fn test_streak_broken() {
        let log = sample_log();
        assert_eq!(log.logging_streak(day(2026, 3, 16)), 0);
        assert_eq!(FoodLog::new(Vec::new()).logging_streak(day(2026, 3, 14)), 0);
    }
}
