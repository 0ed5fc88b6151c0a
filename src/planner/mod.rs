pub mod catalog;
pub mod constants;
pub mod generator;

pub use catalog::{default_selection, is_non_vegetarian, meal_options, regional_foods, staples};
pub use constants::*;
pub use generator::{generate_plan, pick_items, plan_meal};
