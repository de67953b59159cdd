use serde::{Deserialize, Serialize};

use crate::aggregator::constants::{
    DEFAULT_CARB_FRACTION, DEFAULT_FAT_FRACTION, DEFAULT_FRUIT_SERVINGS, DEFAULT_PROTEIN_FRACTION,
    DEFAULT_SODIUM_LIMIT_MG, DEFAULT_VEGETABLE_SERVINGS, FIBER_GRAMS_PER_1000_KCAL,
    KCAL_PER_GRAM_CARB, KCAL_PER_GRAM_FAT, KCAL_PER_GRAM_PROTEIN, MIN_FIBER_GOAL_GRAMS,
    SUGAR_CALORIE_FRACTION,
};
use crate::error::{NutritionError, Result};

/// Share of daily calories assigned to each macro (fractions in 0-1).
///
/// The three fractions conventionally sum to 1 but are not required to.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MacroSplit {
    pub carbohydrates: f64,
    pub protein: f64,
    pub fat: f64,
}

impl Default for MacroSplit {
    fn default() -> Self {
        Self {
            carbohydrates: DEFAULT_CARB_FRACTION,
            protein: DEFAULT_PROTEIN_FRACTION,
            fat: DEFAULT_FAT_FRACTION,
        }
    }
}

impl MacroSplit {
    pub fn new(carbohydrates: f64, protein: f64, fat: f64) -> Result<Self> {
        let split = Self {
            carbohydrates,
            protein,
            fat,
        };
        split.validate()?;
        Ok(split)
    }

    fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("carbohydrates", self.carbohydrates),
            ("protein", self.protein),
            ("fat", self.fat),
        ] {
            if !value.is_finite() || !(0.0..=1.0).contains(&value) {
                return Err(NutritionError::InvalidInput(format!(
                    "macro fraction for {} must be between 0 and 1, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Daily calorie, macro, and nutrient targets for one user.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTargets {
    pub calorie_goal: f64,
    pub macros: MacroSplit,
    pub fiber_goal_grams: f64,
    pub added_sugar_limit_grams: f64,
    pub sodium_limit_milligrams: f64,
    pub vegetable_servings_target: f64,
    pub fruit_servings_target: f64,
}

impl NutritionTargets {
    /// Build targets from a calorie goal, filling every other field with its default.
    ///
    /// The goal must be finite and positive.
    pub fn new(calorie_goal: f64) -> Result<Self> {
        if !calorie_goal.is_finite() || calorie_goal <= 0.0 {
            return Err(NutritionError::InvalidInput(format!(
                "calorie goal must be a positive number, got {}",
                calorie_goal
            )));
        }

        Ok(Self {
            calorie_goal,
            macros: MacroSplit::default(),
            fiber_goal_grams: default_fiber_goal(calorie_goal),
            added_sugar_limit_grams: default_added_sugar_limit(calorie_goal),
            sodium_limit_milligrams: DEFAULT_SODIUM_LIMIT_MG,
            vegetable_servings_target: DEFAULT_VEGETABLE_SERVINGS,
            fruit_servings_target: DEFAULT_FRUIT_SERVINGS,
        })
    }

    pub fn with_macro_split(mut self, macros: MacroSplit) -> Self {
        self.macros = macros;
        self
    }

    pub fn with_fiber_goal(mut self, grams: f64) -> Self {
        self.fiber_goal_grams = grams;
        self
    }

    pub fn with_added_sugar_limit(mut self, grams: f64) -> Self {
        self.added_sugar_limit_grams = grams;
        self
    }

    pub fn with_sodium_limit(mut self, milligrams: f64) -> Self {
        self.sodium_limit_milligrams = milligrams;
        self
    }

    pub fn with_vegetable_target(mut self, servings: f64) -> Self {
        self.vegetable_servings_target = servings;
        self
    }

    pub fn with_fruit_target(mut self, servings: f64) -> Self {
        self.fruit_servings_target = servings;
        self
    }

    #[inline]
    pub fn protein_target_grams(&self) -> f64 {
        self.calorie_goal * self.macros.protein / KCAL_PER_GRAM_PROTEIN
    }

    #[inline]
    pub fn carbohydrate_target_grams(&self) -> f64 {
        self.calorie_goal * self.macros.carbohydrates / KCAL_PER_GRAM_CARB
    }

    #[inline]
    pub fn fat_target_grams(&self) -> f64 {
        self.calorie_goal * self.macros.fat / KCAL_PER_GRAM_FAT
    }
}

/// `max(20, goal/1000 * 14)` grams.
pub fn default_fiber_goal(calorie_goal: f64) -> f64 {
    f64::max(
        MIN_FIBER_GOAL_GRAMS,
        calorie_goal / 1000.0 * FIBER_GRAMS_PER_1000_KCAL,
    )
}

/// 10% of calories from added sugar, in grams.
pub fn default_added_sugar_limit(calorie_goal: f64) -> f64 {
    calorie_goal * SUGAR_CALORIE_FRACTION / KCAL_PER_GRAM_CARB
}

/// Optional target overrides, as read from a JSON config file.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TargetsConfig {
    #[serde(default)]
    pub calorie_goal: Option<f64>,
    #[serde(default)]
    pub macro_split: Option<MacroSplit>,
    #[serde(default)]
    pub fiber_goal_grams: Option<f64>,
    #[serde(default)]
    pub added_sugar_limit_grams: Option<f64>,
    #[serde(default)]
    pub sodium_limit_milligrams: Option<f64>,
    #[serde(default)]
    pub vegetable_servings_target: Option<f64>,
    #[serde(default)]
    pub fruit_servings_target: Option<f64>,
}

impl TargetsConfig {
    /// Resolve into targets, using `default_goal` when the config names no calorie goal.
    ///
    /// Fiber and sugar defaults derive from the resolved goal unless overridden.
    pub fn into_targets(self, default_goal: f64) -> Result<NutritionTargets> {
        let mut targets = NutritionTargets::new(self.calorie_goal.unwrap_or(default_goal))?;

        if let Some(split) = self.macro_split {
            split.validate()?;
            targets = targets.with_macro_split(split);
        }
        if let Some(grams) = self.fiber_goal_grams {
            targets = targets.with_fiber_goal(grams);
        }
        if let Some(grams) = self.added_sugar_limit_grams {
            targets = targets.with_added_sugar_limit(grams);
        }
        if let Some(mg) = self.sodium_limit_milligrams {
            targets = targets.with_sodium_limit(mg);
        }
        if let Some(servings) = self.vegetable_servings_target {
            targets = targets.with_vegetable_target(servings);
        }
        if let Some(servings) = self.fruit_servings_target {
            targets = targets.with_fruit_target(servings);
        }

        Ok(targets)
    }
}
