use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::NutritionBreakdown;

/// A single logged meal.
///
/// `estimated_calories` is the legacy estimate kept for entries logged before
/// structured breakdowns existed; when `nutrition` is present it takes precedence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FoodLogEntry {
    pub id: Uuid,

    /// Timestamp in the offset the meal was logged in.
    pub date: DateTime<FixedOffset>,

    pub summary: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_calories: Option<i64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meal_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nutrition: Option<NutritionBreakdown>,
}

impl FoodLogEntry {
    pub fn new(date: DateTime<FixedOffset>, summary: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            date,
            summary: summary.into(),
            estimated_calories: None,
            meal_type: None,
            nutrition: None,
        }
    }

    pub fn with_estimated_calories(mut self, calories: i64) -> Self {
        self.estimated_calories = Some(calories);
        self
    }

    pub fn with_nutrition(mut self, nutrition: NutritionBreakdown) -> Self {
        self.nutrition = Some(nutrition);
        self
    }

    pub fn with_meal_type(mut self, meal_type: impl Into<String>) -> Self {
        self.meal_type = Some(meal_type.into());
        self
    }

    /// Calendar date of the entry in its own offset.
    #[inline]
    pub fn local_date(&self) -> NaiveDate {
        self.date.date_naive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_legacy_entry() {
        let json = r#"{
            "id": "6f1c1f0e-8f5a-4d5e-9a65-0c7b1b9d2a11",
            "date": "2026-03-14T08:30:00-05:00",
            "summary": "Oatmeal with berries",
            "estimatedCalories": 350
        }"#;

        let entry: FoodLogEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.summary, "Oatmeal with berries");
        assert_eq!(entry.estimated_calories, Some(350));
        assert!(entry.nutrition.is_none());
        assert!(entry.meal_type.is_none());
    }

    #[test]
    fn test_local_date_uses_entry_offset() {
        // 23:30 at -05:00 is already the next day in UTC.
        let date = DateTime::parse_from_rfc3339("2026-03-14T23:30:00-05:00").unwrap();
        let entry = FoodLogEntry::new(date, "Late snack");

        assert_eq!(
            entry.local_date(),
            NaiveDate::from_ymd_opt(2026, 3, 14).unwrap()
        );
    }
}
