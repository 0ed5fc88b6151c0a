/// Most items drawn from a slot's selection for one meal.
pub const PICKS_PER_MEAL: usize = 2;

/// Separator between items in a meal's food string.
pub const FOOD_SEPARATOR: &str = ", ";

/// Items never offered on a vegetarian diet.
///
/// An option is excluded when it equals one of these or contains one as a
/// whole word ("Chicken Curry" is excluded by "Chicken").
pub const NON_VEGETARIAN_ITEMS: &[&str] = &["Chicken", "Fish Curry", "Mutton", "Egg"];
