use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::label::Labeled;

/// Accepted body weight in kilograms.
pub const WEIGHT_RANGE_KG: (f64, f64) = (30.0, 150.0);

/// Accepted height in centimetres.
pub const HEIGHT_RANGE_CM: (f64, f64) = (120.0, 250.0);

/// Accepted age in years.
pub const AGE_RANGE_YEARS: (f64, f64) = (10.0, 100.0);

/// Accepted blood glucose reading in mg/dL.
pub const BLOOD_GLUCOSE_RANGE: (f64, f64) = (70.0, 250.0);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    Male,
    Female,
}

impl Labeled for Gender {
    const KIND: &'static str = "gender";
    const ALL: &'static [Self] = &[Gender::Male, Gender::Female];

    fn label(self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
        }
    }
}

/// Self-reported activity level, each mapped to a fixed TDEE factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ActivityLevel {
    #[default]
    Sedentary,
    #[serde(rename = "Lightly Active")]
    LightlyActive,
    #[serde(rename = "Moderately Active")]
    ModeratelyActive,
    #[serde(rename = "Very Active")]
    VeryActive,
    #[serde(rename = "Extra Active")]
    ExtraActive,
}

impl Labeled for ActivityLevel {
    const KIND: &'static str = "activity level";
    const ALL: &'static [Self] = &[
        ActivityLevel::Sedentary,
        ActivityLevel::LightlyActive,
        ActivityLevel::ModeratelyActive,
        ActivityLevel::VeryActive,
        ActivityLevel::ExtraActive,
    ];

    fn label(self) -> &'static str {
        match self {
            ActivityLevel::Sedentary => "Sedentary",
            ActivityLevel::LightlyActive => "Lightly Active",
            ActivityLevel::ModeratelyActive => "Moderately Active",
            ActivityLevel::VeryActive => "Very Active",
            ActivityLevel::ExtraActive => "Extra Active",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Gender {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s)
    }
}

impl fmt::Display for ActivityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ActivityLevel {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s)
    }
}

/// Body metrics and identity details entered by the user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub city: String,
    pub weight_kg: f64,
    pub height_cm: f64,
    pub age: u32,
    pub gender: Gender,
    pub activity: ActivityLevel,

    /// Collected alongside the other metrics but not used by any calculation.
    #[serde(default)]
    pub blood_glucose_mg_dl: Option<f64>,
}

impl UserProfile {
    /// Reject non-finite or out-of-range metrics.
    pub fn validate(&self) -> Result<()> {
        check_range("weight (kg)", self.weight_kg, WEIGHT_RANGE_KG)?;
        check_range("height (cm)", self.height_cm, HEIGHT_RANGE_CM)?;
        check_range("age", self.age as f64, AGE_RANGE_YEARS)?;
        if let Some(glucose) = self.blood_glucose_mg_dl {
            check_range("blood glucose (mg/dL)", glucose, BLOOD_GLUCOSE_RANGE)?;
        }
        Ok(())
    }
}

/// Check that `value` is finite and inside the inclusive `range`.
pub fn check_range(field: &'static str, value: f64, range: (f64, f64)) -> Result<()> {
    let (min, max) = range;
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(PlannerError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_profile() -> UserProfile {
        UserProfile {
            name: "Asha".to_string(),
            city: "Pune".to_string(),
            weight_kg: 70.0,
            height_cm: 170.0,
            age: 30,
            gender: Gender::Female,
            activity: ActivityLevel::ModeratelyActive,
            blood_glucose_mg_dl: Some(100.0),
        }
    }

    #[test]
    fn test_validate_accepts_defaults() {
        assert!(sample_profile().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_out_of_range() {
        let mut profile = sample_profile();
        profile.weight_kg = 12.0;
        assert!(matches!(
            profile.validate(),
            Err(PlannerError::OutOfRange { field: "weight (kg)", .. })
        ));

        let mut profile = sample_profile();
        profile.age = 101;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_non_finite() {
        let mut profile = sample_profile();
        profile.height_cm = f64::NAN;
        assert!(profile.validate().is_err());

        let mut profile = sample_profile();
        profile.weight_kg = f64::INFINITY;
        assert!(profile.validate().is_err());
    }

    #[test]
    fn test_range_bounds_are_inclusive() {
        assert!(check_range("age", 10.0, AGE_RANGE_YEARS).is_ok());
        assert!(check_range("age", 100.0, AGE_RANGE_YEARS).is_ok());
    }

    #[test]
    fn test_activity_parse_is_case_insensitive() {
        assert_eq!(
            "lightly active".parse::<ActivityLevel>().unwrap(),
            ActivityLevel::LightlyActive
        );
        assert_eq!("MALE".parse::<Gender>().unwrap(), Gender::Male);
    }

    #[test]
    fn test_unknown_activity_is_rejected() {
        let err = "Couch Potato".parse::<ActivityLevel>().unwrap_err();
        assert!(matches!(err, PlannerError::UnknownValue { kind: "activity level", .. }));

        let err = "Very Activ".parse::<ActivityLevel>().unwrap_err();
        assert!(err.to_string().contains("did you mean 'Very Active'"));
    }
}
