pub mod calculations;
pub mod constants;

pub use calculations::{
    calculate_bmi, calculate_bmr, calculate_macros, calculate_tdee, classify_bmi, compute_targets,
};
pub use constants::*;
