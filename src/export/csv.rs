use super::model::WorkoutRow;
use crate::errors::AppResult;
use crate::models::Workout;
use csv::Writer;
use std::path::Path;

/// Write the workouts as CSV, header first.
pub fn write_csv(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;
    for w in workouts {
        wtr.serialize(WorkoutRow::from(w))?;
    }
    wtr.flush()?;
    Ok(())
}
