use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

use crate::models::preferences::MealSlot;

/// A non-fatal condition worth showing to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// An optional file (such as the PDF logo) was not found and was skipped.
    MissingAsset(PathBuf),

    /// A meal slot had fewer candidates than one row draws; all of them are used.
    InsufficientCandidates { slot: MealSlot, available: usize },
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::MissingAsset(path) => {
                write!(f, "Asset not found, skipped: {}", path.display())
            }
            Notice::InsufficientCandidates { slot, available } => write!(
                f,
                "{} has only {} selected option(s); every day will use all of them",
                slot, available
            ),
        }
    }
}
