use std::fmt;

use serde::{Deserialize, Serialize};

use crate::models::label::Labeled;
use crate::models::notice::Notice;
use crate::models::preferences::MealSlot;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Labeled for Day {
    const KIND: &'static str = "day";
    const ALL: &'static [Self] = &[
        Day::Monday,
        Day::Tuesday,
        Day::Wednesday,
        Day::Thursday,
        Day::Friday,
        Day::Saturday,
        Day::Sunday,
    ];

    fn label(self) -> &'static str {
        match self {
            Day::Monday => "Monday",
            Day::Tuesday => "Tuesday",
            Day::Wednesday => "Wednesday",
            Day::Thursday => "Thursday",
            Day::Friday => "Friday",
            Day::Saturday => "Saturday",
            Day::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One meal of the weekly plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlanEntry {
    pub day: Day,
    pub slot: MealSlot,

    /// Fixed items served with every meal in this slot.
    pub staples: Vec<String>,

    /// Items drawn from the user's selection for this slot.
    pub picks: Vec<String>,
}

impl PlanEntry {
    /// Staples followed by picks, comma separated.
    pub fn food(&self) -> String {
        self.staples
            .iter()
            .chain(self.picks.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Day name on the first meal of the day, empty on the rest.
    pub fn day_label(&self) -> &'static str {
        if self.slot == MealSlot::first() {
            self.day.label()
        } else {
            ""
        }
    }
}

/// A 7-day plan plus anything non-fatal noticed while building it.
#[derive(Debug, Clone, Default, Serialize)]
pub struct WeeklyPlan {
    pub entries: Vec<PlanEntry>,
    pub notices: Vec<Notice>,
}

impl WeeklyPlan {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries for a single day, in slot order.
    pub fn day(&self, day: Day) -> impl Iterator<Item = &PlanEntry> {
        self.entries.iter().filter(move |e| e.day == day)
    }
}
