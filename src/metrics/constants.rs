use crate::models::ActivityLevel;

// ─────────────────────────────────────────────────────────────────────────────
// BMI bands (kg/m²)
// ─────────────────────────────────────────────────────────────────────────────

/// Upper bound (exclusive) of the underweight band.
pub const BMI_UNDERWEIGHT_MAX: f64 = 18.5;

/// Upper bound (exclusive) of the normal weight band.
pub const BMI_NORMAL_MAX: f64 = 25.0;

/// Upper bound (exclusive) of the overweight band.
pub const BMI_OVERWEIGHT_MAX: f64 = 30.0;

// ─────────────────────────────────────────────────────────────────────────────
// Mifflin-St Jeor coefficients
// ─────────────────────────────────────────────────────────────────────────────

pub const BMR_WEIGHT_COEF: f64 = 10.0;
pub const BMR_HEIGHT_COEF: f64 = 6.25;
pub const BMR_AGE_COEF: f64 = 5.0;
pub const BMR_MALE_OFFSET: f64 = 5.0;
pub const BMR_FEMALE_OFFSET: f64 = -161.0;

// ─────────────────────────────────────────────────────────────────────────────
// Macro split
// ─────────────────────────────────────────────────────────────────────────────

/// Fraction of TDEE allocated to each macro.
pub const PROTEIN_SHARE: f64 = 0.2;
pub const FAT_SHARE: f64 = 0.3;
pub const CARB_SHARE: f64 = 0.5;

/// Energy density in kcal per gram.
pub const KCAL_PER_G_PROTEIN: f64 = 4.0;
pub const KCAL_PER_G_FAT: f64 = 9.0;
pub const KCAL_PER_G_CARB: f64 = 4.0;

/// TDEE multiplier for an activity level.
pub fn activity_factor(level: ActivityLevel) -> f64 {
    match level {
        ActivityLevel::Sedentary => 1.2,
        ActivityLevel::LightlyActive => 1.375,
        ActivityLevel::ModeratelyActive => 1.55,
        ActivityLevel::VeryActive => 1.725,
        ActivityLevel::ExtraActive => 1.9,
    }
}
