use std::path::Path;

use tracing::info;

use crate::error::Result;
use crate::models::{Labeled, WeeklyPlan};

/// Write the plan as a Day,Meal,Food table.
pub fn write_csv<P: AsRef<Path>>(path: P, plan: &WeeklyPlan) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(["Day", "Meal", "Food"])?;
    for entry in &plan.entries {
        let food = entry.food();
        writer.write_record([entry.day_label(), entry.slot.label(), food.as_str()])?;
    }
    writer.flush()?;

    info!(path = %path.display(), rows = plan.len(), "wrote CSV");
    Ok(())
}
