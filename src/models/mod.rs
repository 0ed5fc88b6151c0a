pub mod label;
pub mod notice;
pub mod plan;
pub mod preferences;
pub mod profile;
pub mod targets;

pub use label::Labeled;
pub use notice::Notice;
pub use plan::{Day, PlanEntry, WeeklyPlan};
pub use preferences::{DietType, MealPreferences, MealSlot, Region};
pub use profile::{ActivityLevel, Gender, UserProfile};
pub use targets::{BmiCategory, Macros, NutritionTargets};
