use tracing::debug;

use crate::error::{PlannerError, Result};
use crate::metrics::constants::*;
use crate::models::{ActivityLevel, BmiCategory, Gender, Macros, NutritionTargets, UserProfile};

/// Reject NaN, infinities, zero and negative values.
fn require_positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(PlannerError::InvalidMetric { field, value })
    }
}

/// Body Mass Index from weight in kg and height in cm.
pub fn calculate_bmi(weight_kg: f64, height_cm: f64) -> Result<f64> {
    let weight_kg = require_positive("weight (kg)", weight_kg)?;
    let height_m = require_positive("height (cm)", height_cm)? / 100.0;
    require_positive("BMI", weight_kg / (height_m * height_m))
}

/// Classify a BMI value into its band.
pub fn classify_bmi(bmi: f64) -> Result<BmiCategory> {
    let bmi = require_positive("BMI", bmi)?;
    Ok(if bmi < BMI_UNDERWEIGHT_MAX {
        BmiCategory::Underweight
    } else if bmi < BMI_NORMAL_MAX {
        BmiCategory::Normal
    } else if bmi < BMI_OVERWEIGHT_MAX {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    })
}

/// Basal Metabolic Rate (Mifflin-St Jeor), in kcal/day.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> Result<f64> {
    let weight_kg = require_positive("weight (kg)", weight_kg)?;
    let height_cm = require_positive("height (cm)", height_cm)?;
    let offset = match gender {
        Gender::Male => BMR_MALE_OFFSET,
        Gender::Female => BMR_FEMALE_OFFSET,
    };
    let bmr = BMR_WEIGHT_COEF * weight_kg + BMR_HEIGHT_COEF * height_cm
        - BMR_AGE_COEF * age as f64
        + offset;
    require_positive("BMR", bmr)
}

/// Total Daily Energy Expenditure: BMR scaled by the activity factor.
pub fn calculate_tdee(bmr: f64, activity: ActivityLevel) -> Result<f64> {
    Ok(require_positive("BMR", bmr)? * activity_factor(activity))
}

/// Split TDEE 20/30/50 into protein/fat/carb grams.
pub fn calculate_macros(tdee: f64) -> Result<Macros> {
    let tdee = require_positive("TDEE", tdee)?;
    Ok(Macros {
        protein_g: grams(tdee, PROTEIN_SHARE, KCAL_PER_G_PROTEIN),
        fat_g: grams(tdee, FAT_SHARE, KCAL_PER_G_FAT),
        carbs_g: grams(tdee, CARB_SHARE, KCAL_PER_G_CARB),
    })
}

fn grams(tdee: f64, share: f64, kcal_per_gram: f64) -> u32 {
    (share * tdee / kcal_per_gram).round() as u32
}

/// Validate a profile and compute all of its targets.
pub fn compute_targets(profile: &UserProfile) -> Result<NutritionTargets> {
    profile.validate()?;

    let bmi = calculate_bmi(profile.weight_kg, profile.height_cm)?;
    let bmr = calculate_bmr(
        profile.weight_kg,
        profile.height_cm,
        profile.age,
        profile.gender,
    )?;
    let tdee = calculate_tdee(bmr, profile.activity)?;
    let targets = NutritionTargets {
        bmi,
        bmi_category: classify_bmi(bmi)?,
        bmr,
        tdee,
        macros: calculate_macros(tdee)?,
    };

    debug!(
        bmi = targets.bmi,
        bmr = targets.bmr,
        tdee = targets.tdee,
        "computed nutrition targets"
    );
    Ok(targets)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Labeled;

    #[test]
    fn test_bmi_reference_value() {
        let bmi = calculate_bmi(70.0, 170.0).unwrap();
        assert!((bmi - 24.22).abs() < 0.01);
        assert_eq!(classify_bmi(bmi).unwrap(), BmiCategory::Normal);
    }

    #[test]
    fn test_bmi_rejects_bad_input() {
        assert!(matches!(
            calculate_bmi(70.0, 0.0),
            Err(PlannerError::InvalidMetric { field: "height (cm)", .. })
        ));
        assert!(calculate_bmi(f64::NAN, 170.0).is_err());
        assert!(calculate_bmi(70.0, f64::INFINITY).is_err());
        assert!(calculate_bmi(-70.0, 170.0).is_err());
    }

    #[test]
    fn test_classify_bmi_thresholds() {
        let classify = |bmi| classify_bmi(bmi).unwrap();
        assert_eq!(classify(18.49), BmiCategory::Underweight);
        assert_eq!(classify(18.5), BmiCategory::Normal);
        assert_eq!(classify(24.99), BmiCategory::Normal);
        assert_eq!(classify(25.0), BmiCategory::Overweight);
        assert_eq!(classify(29.99), BmiCategory::Overweight);
        assert_eq!(classify(30.0), BmiCategory::Obese);
    }

    #[test]
    fn test_classify_bmi_rejects_non_finite() {
        assert!(classify_bmi(f64::NAN).is_err());
        assert!(classify_bmi(f64::INFINITY).is_err());
        assert!(classify_bmi(0.0).is_err());
    }

    #[test]
    fn test_bmr_gender_offset() {
        let male = calculate_bmr(70.0, 170.0, 30, Gender::Male).unwrap();
        let female = calculate_bmr(70.0, 170.0, 30, Gender::Female).unwrap();
        assert!((male - 1617.5).abs() < 1e-9);
        assert!((male - female - 166.0).abs() < 1e-9);
    }

    #[test]
    fn test_bmr_rejects_bad_input() {
        assert!(calculate_bmr(f64::NAN, 170.0, 30, Gender::Male).is_err());
        assert!(calculate_bmr(70.0, 0.0, 30, Gender::Female).is_err());
        // Extreme age drives the formula below zero.
        assert!(matches!(
            calculate_bmr(30.0, 120.0, 400, Gender::Female),
            Err(PlannerError::InvalidMetric { field: "BMR", .. })
        ));
    }

    #[test]
    fn test_tdee_uses_factor_table() {
        let bmr = 1617.5;
        let factors = [1.2, 1.375, 1.55, 1.725, 1.9];
        for (level, factor) in ActivityLevel::ALL.iter().zip(factors) {
            let tdee = calculate_tdee(bmr, *level).unwrap();
            assert!((tdee - bmr * factor).abs() < 1e-9);
        }
        let sedentary = calculate_tdee(bmr, ActivityLevel::default()).unwrap();
        assert!((sedentary - 1941.0).abs() < 1e-9);
    }

    #[test]
    fn test_tdee_rejects_bad_bmr() {
        assert!(calculate_tdee(f64::NAN, ActivityLevel::Sedentary).is_err());
        assert!(calculate_tdee(-100.0, ActivityLevel::VeryActive).is_err());
    }

    #[test]
    fn test_macros_reference_value() {
        let macros = calculate_macros(1978.5).unwrap();
        assert_eq!(macros.protein_g, 99);
        assert_eq!(macros.fat_g, 66);
        assert_eq!(macros.carbs_g, 247);
    }

    #[test]
    fn test_macros_reject_bad_tdee() {
        assert!(matches!(
            calculate_macros(f64::NAN),
            Err(PlannerError::InvalidMetric { field: "TDEE", .. })
        ));
        assert!(calculate_macros(-500.0).is_err());
        assert!(calculate_macros(f64::INFINITY).is_err());
    }
}
