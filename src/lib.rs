pub mod cli;
pub mod error;
pub mod export;
pub mod interface;
pub mod metrics;
pub mod models;
pub mod planner;
pub mod session;

pub use error::{PlannerError, Result};
pub use models::{NutritionTargets, UserProfile, WeeklyPlan};
