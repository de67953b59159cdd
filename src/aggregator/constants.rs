// ─────────────────────────────────────────────────────────────────────────────
// Energy densities (kcal per gram). Physiological constants, not settings.
// ─────────────────────────────────────────────────────────────────────────────

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARB: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Target defaults
// ─────────────────────────────────────────────────────────────────────────────

pub const DEFAULT_CARB_FRACTION: f64 = 0.50;
pub const DEFAULT_PROTEIN_FRACTION: f64 = 0.25;
pub const DEFAULT_FAT_FRACTION: f64 = 0.25;

/// Lower bound on the derived fiber goal.
pub const MIN_FIBER_GOAL_GRAMS: f64 = 20.0;

/// Fiber grams per 1000 kcal of calorie goal.
pub const FIBER_GRAMS_PER_1000_KCAL: f64 = 14.0;

/// Share of calories allowed from added sugar.
pub const SUGAR_CALORIE_FRACTION: f64 = 0.10;

pub const DEFAULT_SODIUM_LIMIT_MG: f64 = 2300.0;
pub const DEFAULT_VEGETABLE_SERVINGS: f64 = 2.5;
pub const DEFAULT_FRUIT_SERVINGS: f64 = 2.0;

// ─────────────────────────────────────────────────────────────────────────────
// Produce servings
// ─────────────────────────────────────────────────────────────────────────────

pub const VEGETABLE_TAGS: [&str; 2] = ["vegetables", "leafy_greens"];
pub const FRUIT_TAGS: [&str; 1] = ["fruit"];

/// Portion quantity that counts as one serving.
pub const GRAMS_PER_SERVING: f64 = 100.0;

/// Smallest serving credited for an item with a numeric portion.
pub const MIN_ITEM_SERVING: f64 = 0.25;

// ─────────────────────────────────────────────────────────────────────────────
// Status bounds (ratio of consumed to target or limit)
// ─────────────────────────────────────────────────────────────────────────────

pub const STATUS_LOWER_BOUND: f64 = 0.9;
pub const STATUS_UPPER_BOUND: f64 = 1.1;

/// Limits flip to excessive as soon as they are exceeded.
pub const LIMIT_UPPER_BOUND: f64 = 1.0;

// ─────────────────────────────────────────────────────────────────────────────
// Diet quality weights
//
// The five scored weights sum to 0.90, so a perfect day scores 90. The whole
// food weight has no scored component yet and is deliberately not folded in.
// ─────────────────────────────────────────────────────────────────────────────

pub const WEIGHT_MACROS: f64 = 0.40;
pub const WEIGHT_FIBER: f64 = 0.15;
pub const WEIGHT_SUGAR: f64 = 0.15;
pub const WEIGHT_SODIUM: f64 = 0.10;
pub const WEIGHT_PRODUCE: f64 = 0.10;
pub const WEIGHT_WHOLE_FOOD: f64 = 0.10;

// ─────────────────────────────────────────────────────────────────────────────
// Score shaping
// ─────────────────────────────────────────────────────────────────────────────

/// Ratios in `[NORMALIZE_LOW, NORMALIZE_HIGH]` earn full credit.
pub const NORMALIZE_LOW: f64 = 0.8;
pub const NORMALIZE_HIGH: f64 = 1.2;

/// Slope applied below `NORMALIZE_LOW`.
pub const UNDERSHOOT_SLOPE: f64 = 1.1;

/// Score is `OVERSHOOT_CEILING - ratio` above `NORMALIZE_HIGH`.
pub const OVERSHOOT_CEILING: f64 = 1.4;

/// Score is `LIMIT_PENALTY_CEILING - ratio` once a limit is exceeded.
pub const LIMIT_PENALTY_CEILING: f64 = 1.2;

/// Serving ratios are capped here before normalization.
pub const PRODUCE_RATIO_CAP: f64 = 1.2;

/// Minimum grade thresholds on the 0-100 total.
pub const GRADE_A_MIN: u8 = 90;
pub const GRADE_B_MIN: u8 = 80;
pub const GRADE_C_MIN: u8 = 70;
pub const GRADE_D_MIN: u8 = 60;

// ─────────────────────────────────────────────────────────────────────────────
// Messages
// ─────────────────────────────────────────────────────────────────────────────

pub const ON_TRACK_MIN: f64 = 0.9;
pub const ALMOST_THERE_MIN: f64 = 0.7;

pub const MESSAGE_ON_TRACK: &str = "On track—keep it up!";
pub const MESSAGE_ALMOST_THERE: &str = "Almost there—focus on consistency.";

/// Number of highlights surfaced in a summary.
pub const MAX_HIGHLIGHTS: usize = 2;
