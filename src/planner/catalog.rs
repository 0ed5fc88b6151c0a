use crate::error::Result;
use crate::models::{DietType, Labeled, MealPreferences, MealSlot, Region};
use crate::planner::constants::NON_VEGETARIAN_ITEMS;

/// Items served with every meal in a slot, regardless of region.
pub fn staples(slot: MealSlot) -> &'static [&'static str] {
    match slot {
        MealSlot::Breakfast => &["Tea/Milk"],
        MealSlot::Lunch => &["Rice/Roti"],
        MealSlot::Dinner => &["Rice/Roti"],
    }
}

/// Traditional dishes of a region for one meal slot.
pub fn regional_foods(region: Region, slot: MealSlot) -> &'static [&'static str] {
    match (region, slot) {
        (Region::North, MealSlot::Breakfast) => &["Paratha", "Poha", "Chana", "Aloo Puri"],
        (Region::North, MealSlot::Lunch) => &["Dal", "Paneer", "Veg Curry", "Chicken"],
        (Region::North, MealSlot::Dinner) => &["Dal", "Mix Veg", "Curd", "Khichdi"],

        (Region::South, MealSlot::Breakfast) => &["Idli", "Dosa", "Uttapam", "Upma"],
        (Region::South, MealSlot::Lunch) => &["Sambar", "Rasam", "Veg Poriyal", "Chicken Curry"],
        (Region::South, MealSlot::Dinner) => &["Sambar", "Vegetable Stew", "Curd"],

        (Region::East, MealSlot::Breakfast) => &["Luchi", "Cholar Dal", "Puffed Rice"],
        (Region::East, MealSlot::Lunch) => &["Dal", "Vegetable Curry", "Fish Curry"],
        (Region::East, MealSlot::Dinner) => &["Dal", "Potato Curry", "Curd"],

        (Region::West, MealSlot::Breakfast) => &["Thepla", "Methi Paratha", "Poha"],
        (Region::West, MealSlot::Lunch) => &["Dal", "Veg Kolhapuri", "Chicken Curry"],
        (Region::West, MealSlot::Dinner) => &["Bhindi", "Dal", "Curd"],
    }
}

/// Whether an item contains meat, fish or egg.
pub fn is_non_vegetarian(item: &str) -> bool {
    let item = item.to_lowercase();
    NON_VEGETARIAN_ITEMS.iter().any(|term| {
        let term = term.to_lowercase();
        item.match_indices(&term)
            .any(|(start, _)| is_word_boundary(&item, start, start + term.len()))
    })
}

fn is_word_boundary(text: &str, start: usize, end: usize) -> bool {
    let before = text[..start].chars().next_back();
    let after = text[end..].chars().next();
    !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
}

/// Options the user may pick from for a slot: staples first, then regional dishes.
///
/// Non-vegetarian items are dropped for a vegetarian diet.
pub fn meal_options(region: Region, diet: DietType, slot: MealSlot) -> Vec<&'static str> {
    staples(slot)
        .iter()
        .chain(regional_foods(region, slot))
        .copied()
        .filter(|item| diet == DietType::NonVegetarian || !is_non_vegetarian(item))
        .collect()
}

/// Preferences with the first two options of every slot selected.
pub fn default_selection(region: Region, diet: DietType) -> Result<MealPreferences> {
    let selections = MealSlot::ALL.iter().map(|&slot| {
        let options = meal_options(region, diet, slot);
        (slot, options.into_iter().take(2).collect::<Vec<_>>())
    });
    MealPreferences::new(region, diet, selections)
}
