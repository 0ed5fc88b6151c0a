use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{PlannerError, Result};
use crate::models::label::{suggest, Labeled};
use crate::planner::catalog::meal_options;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    North,
    South,
    East,
    West,
}

impl Labeled for Region {
    const KIND: &'static str = "region";
    const ALL: &'static [Self] = &[Region::North, Region::South, Region::East, Region::West];

    fn label(self) -> &'static str {
        match self {
            Region::North => "North",
            Region::South => "South",
            Region::East => "East",
            Region::West => "West",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DietType {
    #[default]
    Vegetarian,
    #[serde(rename = "Non-Vegetarian")]
    NonVegetarian,
}

impl Labeled for DietType {
    const KIND: &'static str = "diet type";
    const ALL: &'static [Self] = &[DietType::Vegetarian, DietType::NonVegetarian];

    fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-Vegetarian",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Dinner,
}

impl MealSlot {
    /// The slot that opens each day.
    pub fn first() -> Self {
        MealSlot::Breakfast
    }
}

impl Labeled for MealSlot {
    const KIND: &'static str = "meal";
    const ALL: &'static [Self] = &[MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner];

    fn label(self) -> &'static str {
        match self {
            MealSlot::Breakfast => "Breakfast",
            MealSlot::Lunch => "Lunch",
            MealSlot::Dinner => "Dinner",
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Region {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s)
    }
}

impl fmt::Display for DietType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DietType {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s)
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for MealSlot {
    type Err = PlannerError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse_label(s)
    }
}

/// Serialized shape of [`MealPreferences`]; validated on the way in.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct RawMealPreferences {
    region: Region,
    diet: DietType,
    #[serde(default)]
    selections: BTreeMap<MealSlot, Vec<String>>,
}

/// Region, diet and the candidate foods chosen for each meal slot.
///
/// Every selected item is one of the catalog options for its slot, spelled as
/// the catalog spells it, with no repeats.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawMealPreferences", into = "RawMealPreferences")]
pub struct MealPreferences {
    region: Region,
    diet: DietType,
    selections: BTreeMap<MealSlot, Vec<String>>,
}

impl MealPreferences {
    /// Build preferences, matching each selected item against the catalog.
    ///
    /// Items are matched case-insensitively. Anything not offered for the slot
    /// (including non-vegetarian food on a vegetarian diet) is rejected.
    pub fn new<I, S>(region: Region, diet: DietType, selections: I) -> Result<Self>
    where
        I: IntoIterator<Item = (MealSlot, Vec<S>)>,
        S: AsRef<str>,
    {
        let mut resolved: BTreeMap<MealSlot, Vec<String>> =
            MealSlot::ALL.iter().map(|s| (*s, Vec::new())).collect();

        for (slot, items) in selections {
            let options = meal_options(region, diet, slot);
            let chosen = resolved.entry(slot).or_default();

            for item in items {
                let item = item.as_ref().trim();
                let canonical = options
                    .iter()
                    .find(|o| o.eq_ignore_ascii_case(item))
                    .ok_or_else(|| PlannerError::UnknownValue {
                        kind: "food",
                        value: format!("{} ({} {})", item, region, slot),
                        suggestion: suggest(item, options.iter().copied()),
                    })?;

                if !chosen.iter().any(|c| c.as_str() == *canonical) {
                    chosen.push(canonical.to_string());
                }
            }
        }

        Ok(Self {
            region,
            diet,
            selections: resolved,
        })
    }

    pub fn region(&self) -> Region {
        self.region
    }

    pub fn diet(&self) -> DietType {
        self.diet
    }

    /// Items selected for `slot`, in selection order.
    pub fn selected(&self, slot: MealSlot) -> &[String] {
        self.selections.get(&slot).map(Vec::as_slice).unwrap_or(&[])
    }
}

impl TryFrom<RawMealPreferences> for MealPreferences {
    type Error = PlannerError;

    fn try_from(raw: RawMealPreferences) -> Result<Self> {
        MealPreferences::new(raw.region, raw.diet, raw.selections)
    }
}

impl From<MealPreferences> for RawMealPreferences {
    fn from(prefs: MealPreferences) -> Self {
        Self {
            region: prefs.region,
            diet: prefs.diet,
            selections: prefs.selections,
        }
    }
}
