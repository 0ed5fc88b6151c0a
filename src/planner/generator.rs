use rand::seq::SliceRandom;
use rand::Rng;
use tracing::{debug, warn};

use crate::models::{Day, Labeled, MealPreferences, MealSlot, Notice, PlanEntry, WeeklyPlan};
use crate::planner::catalog::staples;
use crate::planner::constants::PICKS_PER_MEAL;

/// Draw up to [`PICKS_PER_MEAL`] distinct items from a slot's selection.
///
/// Takes everything, in random order, when fewer are selected.
pub fn pick_items<R: Rng + ?Sized>(selected: &[String], rng: &mut R) -> Vec<String> {
    let amount = PICKS_PER_MEAL.min(selected.len());
    selected.choose_multiple(rng, amount).cloned().collect()
}

/// Build one meal: the slot's staples plus a fresh draw from the selection.
pub fn plan_meal<R: Rng + ?Sized>(
    day: Day,
    slot: MealSlot,
    preferences: &MealPreferences,
    rng: &mut R,
) -> PlanEntry {
    PlanEntry {
        day,
        slot,
        staples: staples(slot).iter().map(|s| s.to_string()).collect(),
        picks: pick_items(preferences.selected(slot), rng),
    }
}

/// Generate a 7-day plan, three meals per day.
///
/// Every meal draws independently, so the same dish can appear on several
/// days but never twice in one meal.
pub fn generate_plan<R: Rng + ?Sized>(preferences: &MealPreferences, rng: &mut R) -> WeeklyPlan {
    let mut notices = Vec::new();
    for &slot in MealSlot::ALL {
        let available = preferences.selected(slot).len();
        if available < PICKS_PER_MEAL {
            warn!(%slot, available, "fewer candidates than picks per meal");
            notices.push(Notice::InsufficientCandidates { slot, available });
        }
    }

    let mut entries = Vec::with_capacity(Day::ALL.len() * MealSlot::ALL.len());
    for &day in Day::ALL {
        for &slot in MealSlot::ALL {
            entries.push(plan_meal(day, slot, preferences, rng));
        }
    }

    debug!(
        region = %preferences.region(),
        diet = %preferences.diet(),
        meals = entries.len(),
        "generated weekly plan"
    );

    WeeklyPlan { entries, notices }
}
