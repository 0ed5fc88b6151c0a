use crate::models::{
    DietType, Labeled, MealSlot, Notice, NutritionTargets, Region, UserProfile, WeeklyPlan,
};
use crate::planner::meal_options;

/// Display the daily targets for a profile.
pub fn display_targets(profile: &UserProfile, targets: &NutritionTargets) {
    let m = &targets.macros;
    let (p_pct, f_pct, c_pct) = m.percentages();

    println!();
    if profile.name.is_empty() {
        println!("=== Your Daily Nutritional Requirements ===");
    } else {
        println!("=== Daily Nutritional Requirements for {} ===", profile.name);
    }
    println!();
    println!("Calories: {} kcal", targets.calories_kcal());
    println!(
        "Protein: {} g | Fat: {} g | Carbs: {} g",
        m.protein_g, m.fat_g, m.carbs_g
    );
    println!("BMI: {:.2} -> {}", targets.bmi, targets.bmi_category);
    println!("BMR: {:.0} kcal", targets.bmr);
    println!();
    println!("--- Macronutrient Distribution ---");
    println!("Protein {:>5.1}%  {}", p_pct, bar(p_pct));
    println!("Fat     {:>5.1}%  {}", f_pct, bar(f_pct));
    println!("Carbs   {:>5.1}%  {}", c_pct, bar(c_pct));
    println!();
}

/// One block per two percentage points.
fn bar(pct: f64) -> String {
    "#".repeat((pct / 2.0).round() as usize)
}

/// Display a weekly plan as a Day/Meal/Food table.
pub fn display_plan(plan: &WeeklyPlan) {
    if plan.is_empty() {
        println!("No meal plan generated.");
        return;
    }

    let day_width = plan
        .entries
        .iter()
        .map(|e| e.day_label().len())
        .max()
        .unwrap_or(0)
        .max("Day".len());
    let meal_width = MealSlot::ALL
        .iter()
        .map(|s| s.label().len())
        .max()
        .unwrap_or(0);

    println!();
    println!("=== Your 7-Day Personalized Diet Plan ===");
    println!();
    println!("{:<dw$}  {:<mw$}  Food", "Day", "Meal", dw = day_width, mw = meal_width);

    for entry in &plan.entries {
        println!(
            "{:<dw$}  {:<mw$}  {}",
            entry.day_label(),
            entry.slot.label(),
            entry.food(),
            dw = day_width,
            mw = meal_width
        );
    }
    println!();

    display_notices(&plan.notices);
}

/// Display non-fatal notices, if any.
pub fn display_notices(notices: &[Notice]) {
    for notice in notices {
        println!("Note: {}", notice);
    }
}

/// Display the options offered for each meal slot.
pub fn display_catalog(region: Region, diet: DietType) {
    println!();
    println!("=== {} Indian, {} ===", region, diet);
    for &slot in MealSlot::ALL {
        let options = meal_options(region, diet, slot);
        println!("  {:<9} {}", slot.label(), options.join(", "));
    }
    println!();
}
