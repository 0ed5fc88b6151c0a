pub mod prompts;
pub mod render;

pub use prompts::{
    collect_preferences, collect_profile, prompt_choice, prompt_meal_selection, prompt_number,
    prompt_text, prompt_yes_no,
};
pub use render::{display_catalog, display_notices, display_plan, display_targets};
