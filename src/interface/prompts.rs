use dialoguer::{Confirm, Input, MultiSelect, Select};

use crate::error::{PlannerError, Result};
use crate::models::profile::{
    check_range, AGE_RANGE_YEARS, BLOOD_GLUCOSE_RANGE, HEIGHT_RANGE_CM, WEIGHT_RANGE_KG,
};
use crate::models::{
    ActivityLevel, DietType, Gender, Labeled, MealPreferences, MealSlot, Region, UserProfile,
};
use crate::planner::meal_options;

/// Prompt for a free-text field.
pub fn prompt_text(prompt: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a number inside an inclusive range, re-asking until it fits.
pub fn prompt_number(prompt: &str, default: f64, range: (f64, f64)) -> Result<f64> {
    let (min, max) = range;
    let input: String = Input::new()
        .with_prompt(format!("{} [{}-{}]", prompt, min, max))
        .default(default.to_string())
        .validate_with(|input: &String| -> std::result::Result<(), String> {
            let value: f64 = input
                .trim()
                .parse()
                .map_err(|_| "Please enter a number".to_string())?;
            check_range("value", value, range).map_err(|e| e.to_string())
        })
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Invalid number".to_string()))
}

/// Prompt for one value of a labeled enum.
pub fn prompt_choice<T: Labeled>(prompt: &str, default: T) -> Result<T> {
    let default_idx = T::ALL
        .iter()
        .position(|v| v.label() == default.label())
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&T::labels())
        .default(default_idx)
        .interact()?;

    Ok(T::ALL[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect body metrics and identity details.
pub fn collect_profile() -> Result<UserProfile> {
    let name = prompt_text("Your name")?;
    let city = prompt_text("Your city")?;
    let weight_kg = prompt_number("Weight (kg)", 70.0, WEIGHT_RANGE_KG)?;
    let height_cm = prompt_number("Height (cm)", 170.0, HEIGHT_RANGE_CM)?;
    let age = prompt_number("Age", 30.0, AGE_RANGE_YEARS)?.round() as u32;
    let gender = prompt_choice("Gender", Gender::Male)?;
    let activity = prompt_choice("Activity level", ActivityLevel::Sedentary)?;
    let blood_glucose = prompt_number("Blood glucose (mg/dL)", 100.0, BLOOD_GLUCOSE_RANGE)?;

    let profile = UserProfile {
        name,
        city,
        weight_kg,
        height_cm,
        age,
        gender,
        activity,
        blood_glucose_mg_dl: Some(blood_glucose),
    };
    profile.validate()?;
    Ok(profile)
}

/// Prompt for the candidate foods of one meal slot.
///
/// The first two options start checked.
pub fn prompt_meal_selection(region: Region, diet: DietType, slot: MealSlot) -> Result<Vec<String>> {
    let options = meal_options(region, diet, slot);
    let defaults: Vec<bool> = (0..options.len()).map(|i| i < 2).collect();

    let chosen = MultiSelect::new()
        .with_prompt(format!("{} options (space to toggle, enter to confirm)", slot))
        .items(&options)
        .defaults(&defaults)
        .interact()?;

    Ok(chosen.into_iter().map(|i| options[i].to_string()).collect())
}

/// Collect region, diet and per-slot selections.
pub fn collect_preferences() -> Result<MealPreferences> {
    let region = prompt_choice("Preferred region", Region::North)?;
    let diet = prompt_choice("Diet type", DietType::Vegetarian)?;

    let mut selections = Vec::with_capacity(MealSlot::ALL.len());
    for &slot in MealSlot::ALL {
        selections.push((slot, prompt_meal_selection(region, diet, slot)?));
    }

    MealPreferences::new(region, diet, selections)
}
