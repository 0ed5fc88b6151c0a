use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::label::Labeled;

/// BMI classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BmiCategory {
    Underweight,
    #[serde(rename = "Normal weight")]
    Normal,
    Overweight,
    Obese,
}

impl Labeled for BmiCategory {
    const KIND: &'static str = "BMI category";
    const ALL: &'static [Self] = &[
        BmiCategory::Underweight,
        BmiCategory::Normal,
        BmiCategory::Overweight,
        BmiCategory::Obese,
    ];

    fn label(self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obese => "Obese",
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Daily macronutrient targets in grams.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Macros {
    pub protein_g: u32,
    pub fat_g: u32,
    pub carbs_g: u32,
}

impl Macros {
    /// Energy of the rounded gram targets (4/9/4 kcal per gram).
    pub fn calories(&self) -> u32 {
        self.protein_g * 4 + self.fat_g * 9 + self.carbs_g * 4
    }

    /// Share of each macro by weight, as percentages (protein, fat, carbs).
    pub fn percentages(&self) -> (f64, f64, f64) {
        let total = (self.protein_g + self.fat_g + self.carbs_g) as f64;
        if total == 0.0 {
            return (0.0, 0.0, 0.0);
        }
        (
            self.protein_g as f64 / total * 100.0,
            self.fat_g as f64 / total * 100.0,
            self.carbs_g as f64 / total * 100.0,
        )
    }
}

/// Computed energy and body-composition targets for one profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NutritionTargets {
    pub bmi: f64,
    pub bmi_category: BmiCategory,
    pub bmr: f64,
    pub tdee: f64,
    pub macros: Macros,
}

impl NutritionTargets {
    /// Daily calorie target, truncated to whole kcal.
    pub fn calories_kcal(&self) -> i64 {
        self.tdee.trunc() as i64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_macro_calories() {
        let macros = Macros {
            protein_g: 99,
            fat_g: 66,
            carbs_g: 247,
        };
        assert_eq!(macros.calories(), 99 * 4 + 66 * 9 + 247 * 4);
    }

    #[test]
    fn test_macro_percentages_sum_to_100() {
        let macros = Macros {
            protein_g: 99,
            fat_g: 66,
            carbs_g: 247,
        };
        let (p, f, c) = macros.percentages();
        assert!((p + f + c - 100.0).abs() < 1e-9);
        assert!(c > p && p > f);
    }

    #[test]
    fn test_macro_percentages_empty() {
        assert_eq!(Macros::default().percentages(), (0.0, 0.0, 0.0));
    }
}
