use std::collections::HashSet;

use rand::rngs::StdRng;
use rand::SeedableRng;

use thali_planner_rs::models::{Day, DietType, Labeled, MealPreferences, MealSlot, Notice, Region};
use thali_planner_rs::planner::{
    default_selection, generate_plan, meal_options, staples, NON_VEGETARIAN_ITEMS, PICKS_PER_MEAL,
};

fn full_selection(region: Region, diet: DietType) -> MealPreferences {
    let selections = MealSlot::ALL
        .iter()
        .map(|&slot| (slot, meal_options(region, diet, slot)));
    MealPreferences::new(region, diet, selections).unwrap()
}

#[test]
fn test_plan_always_has_21_rows() {
    for &region in Region::ALL {
        for &diet in DietType::ALL {
            let prefs = full_selection(region, diet);
            let plan = generate_plan(&prefs, &mut StdRng::seed_from_u64(3));
            assert_eq!(plan.len(), Day::ALL.len() * MealSlot::ALL.len());
        }
    }
}

#[test]
fn test_every_row_contains_its_staples() {
    let prefs = full_selection(Region::North, DietType::NonVegetarian);
    let plan = generate_plan(&prefs, &mut StdRng::seed_from_u64(11));

    for entry in &plan.entries {
        let food = entry.food();
        for staple in staples(entry.slot) {
            assert!(food.contains(staple), "{:?} missing {}", entry, staple);
        }
    }
}

#[test]
fn test_picks_are_distinct_subset_of_selection() {
    let prefs = full_selection(Region::South, DietType::NonVegetarian);

    for seed in 0..20 {
        let plan = generate_plan(&prefs, &mut StdRng::seed_from_u64(seed));
        for entry in &plan.entries {
            let selected: HashSet<&String> = prefs.selected(entry.slot).iter().collect();
            let picks: HashSet<&String> = entry.picks.iter().collect();

            assert_eq!(entry.picks.len(), PICKS_PER_MEAL);
            assert_eq!(picks.len(), entry.picks.len(), "duplicate pick in {:?}", entry);
            assert!(picks.is_subset(&selected));
        }
    }
}

#[test]
fn test_vegetarian_options_exclude_meat() {
    for &region in Region::ALL {
        let prefs = full_selection(region, DietType::Vegetarian);
        for &slot in MealSlot::ALL {
            for banned in NON_VEGETARIAN_ITEMS {
                assert!(!prefs.selected(slot).iter().any(|s| s.as_str() == *banned));
            }
        }
    }
}

#[test]
fn test_short_selection_uses_what_is_there() {
    let prefs = MealPreferences::new(
        Region::West,
        DietType::Vegetarian,
        [
            (MealSlot::Breakfast, vec!["Thepla"]),
            (MealSlot::Lunch, vec!["Dal", "Veg Kolhapuri"]),
            (MealSlot::Dinner, vec!["Bhindi", "Curd", "Dal"]),
        ],
    )
    .unwrap();
    let plan = generate_plan(&prefs, &mut StdRng::seed_from_u64(8));

    assert_eq!(
        plan.notices,
        vec![Notice::InsufficientCandidates {
            slot: MealSlot::Breakfast,
            available: 1
        }]
    );
    for entry in plan.entries.iter().filter(|e| e.slot == MealSlot::Breakfast) {
        assert_eq!(entry.food(), "Tea/Milk, Thepla");
    }
}

#[test]
fn test_default_selection_produces_plan() {
    let prefs = default_selection(Region::East, DietType::Vegetarian).unwrap();
    let plan = generate_plan(&prefs, &mut StdRng::seed_from_u64(21));

    assert!(plan.notices.is_empty());
    let monday: Vec<_> = plan.day(Day::Monday).collect();
    assert_eq!(monday.len(), 3);
    assert_eq!(monday[0].day_label(), "Monday");
    assert_eq!(monday[1].day_label(), "");
}
