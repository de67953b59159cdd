use serde::{Deserialize, Serialize};

/// Nutrient totals reported for a meal or one of its items.
///
/// Every field is optional: `None` means the analyzer gave no value, which is
/// not the same as zero intake. Values only collapse to zero when summed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrate_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_sugar_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium_milligrams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saturated_fat_grams: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unsaturated_fat_grams: Option<f64>,
}

impl NutritionTotals {
    /// True when no field carries a value.
    pub fn is_empty(&self) -> bool {
        self.calories.is_none()
            && self.protein_grams.is_none()
            && self.carbohydrate_grams.is_none()
            && self.fat_grams.is_none()
            && self.fiber_grams.is_none()
            && self.added_sugar_grams.is_none()
            && self.sodium_milligrams.is_none()
            && self.saturated_fat_grams.is_none()
            && self.unsaturated_fat_grams.is_none()
    }
}

/// Portion description attached to a breakdown item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Portion {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub unit: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub quantity: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

/// A named component of a meal (e.g. "side salad").
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BreakdownItem {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portion: Option<Portion>,
    #[serde(default)]
    pub totals: NutritionTotals,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

impl BreakdownItem {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
            portion: None,
            totals: NutritionTotals::default(),
            confidence: None,
            tags: None,
        }
    }

    /// Whether any of the item's tags appears in `wanted`.
    pub fn has_any_tag(&self, wanted: &[&str]) -> bool {
        self.tags
            .as_ref()
            .map(|tags| tags.iter().any(|t| wanted.contains(&t.as_str())))
            .unwrap_or(false)
    }
}

/// Per-field confidence (0-1) reported by the analyzer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overall: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub calories: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protein: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub carbohydrates: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fat: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fiber: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub added_sugar: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sodium: Option<f64>,
}

impl Confidence {
    /// True when at least one field carries a finite value.
    pub fn has_any(&self) -> bool {
        [
            self.overall,
            self.calories,
            self.protein,
            self.carbohydrates,
            self.fat,
            self.fiber,
            self.added_sugar,
            self.sodium,
        ]
        .into_iter()
        .flatten()
        .any(f64::is_finite)
    }
}

/// Structured nutrient analysis of a single logged meal.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionBreakdown {
    #[serde(default)]
    pub totals: NutritionTotals,
    #[serde(default)]
    pub items: Vec<BreakdownItem>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<Confidence>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<Vec<String>>,
}

impl NutritionBreakdown {
    pub fn new(totals: NutritionTotals) -> Self {
        Self {
            totals,
            ..Self::default()
        }
    }
}
