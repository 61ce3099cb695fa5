// ─────────────────────────────────────────────────────────────────────────────
// Macro extraction
// ─────────────────────────────────────────────────────────────────────────────

/// Fallback split when a narrative yields no percentages at all.
pub const DEFAULT_CARBS_PCT: u32 = 50;
pub const DEFAULT_PROTEIN_PCT: u32 = 30;
pub const DEFAULT_FAT_PCT: u32 = 20;

/// Category name alternatives (Spanish | English), matched case-insensitively.
pub const CARBS_NAMES: &str = "carbohidratos|carbohydrates";
pub const PROTEIN_NAMES: &str = "proteínas|proteins";
pub const FAT_NAMES: &str = "grasas|fats";

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin–St Jeor BMR
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = -5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Activity factors
// ─────────────────────────────────────────────────────────────────────────────

pub const SEDENTARY_FACTOR: f64 = 1.2;
pub const LIGHT_ACTIVITY_FACTOR: f64 = 1.375;
pub const MODERATE_FACTOR: f64 = 1.55;
pub const ACTIVE_FACTOR: f64 = 1.725;
pub const VERY_ACTIVE_FACTOR: f64 = 1.9;

/// Minimum Jaro-Winkler score to offer a "did you mean" activity level.
pub const SUGGESTION_THRESHOLD: f64 = 0.7;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (lower bound inclusive)
// ─────────────────────────────────────────────────────────────────────────────

pub const BMI_NORMAL_MIN: f64 = 18.5;
pub const BMI_OVERWEIGHT_MIN: f64 = 25.0;
pub const BMI_OBESE_MIN: f64 = 30.0;
