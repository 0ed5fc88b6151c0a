use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::models::{MealPreferences, UserProfile};

/// Answers saved from an earlier run, so the planner can skip the prompts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub profile: UserProfile,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferences: Option<MealPreferences>,
}

/// Load a session from a JSON file.
///
/// Profile metrics and meal selections are validated on load.
pub fn load_session<P: AsRef<Path>>(path: P) -> Result<Session> {
    let content = fs::read_to_string(path.as_ref())?;
    let session: Session = serde_json::from_str(&content)?;
    session.profile.validate()?;

    debug!(path = %path.as_ref().display(), "loaded session");
    Ok(session)
}

/// Save a session to a JSON file.
pub fn save_session<P: AsRef<Path>>(path: P, session: &Session) -> Result<()> {
    let json = serde_json::to_string_pretty(session)?;
    fs::write(path, json)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    use crate::error::PlannerError;
    use crate::models::{ActivityLevel, DietType, Gender, MealSlot, Region};

    fn sample_session() -> Session {
        Session {
            profile: UserProfile {
                name: "Meera".to_string(),
                city: "Kolkata".to_string(),
                weight_kg: 58.0,
                height_cm: 160.0,
                age: 41,
                gender: Gender::Female,
                activity: ActivityLevel::LightlyActive,
                blood_glucose_mg_dl: Some(110.0),
            },
            preferences: Some(
                MealPreferences::new(
                    Region::East,
                    DietType::NonVegetarian,
                    [(MealSlot::Lunch, vec!["Dal", "Fish Curry"])],
                )
                .unwrap(),
            ),
        }
    }

    #[test]
    fn test_save_and_load_roundtrip() {
        let session = sample_session();
        let file = NamedTempFile::new().unwrap();
        save_session(file.path(), &session).unwrap();

        let reloaded = load_session(file.path()).unwrap();
        assert_eq!(reloaded, session);
    }

    #[test]
    fn test_load_without_preferences() {
        let json = r#"{
            "profile": {"name": "A", "city": "B", "weight_kg": 70, "height_cm": 170,
                        "age": 30, "gender": "Male", "activity": "Very Active"}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        let session = load_session(file.path()).unwrap();
        assert_eq!(session.profile.activity, ActivityLevel::VeryActive);
        assert!(session.profile.blood_glucose_mg_dl.is_none());
        assert!(session.preferences.is_none());
    }

    #[test]
    fn test_load_rejects_out_of_range_profile() {
        let json = r#"{
            "profile": {"name": "A", "city": "B", "weight_kg": 400, "height_cm": 170,
                        "age": 30, "gender": "Male", "activity": "Sedentary"}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(
            load_session(file.path()),
            Err(PlannerError::OutOfRange { .. })
        ));
    }

    #[test]
    fn test_load_rejects_unknown_activity() {
        let json = r#"{
            "profile": {"name": "A", "city": "B", "weight_kg": 70, "height_cm": 170,
                        "age": 30, "gender": "Male", "activity": "Couch"}
        }"#;

        let mut file = NamedTempFile::new().unwrap();
        file.write_all(json.as_bytes()).unwrap();

        assert!(matches!(load_session(file.path()), Err(PlannerError::Json(_))));
    }
}
