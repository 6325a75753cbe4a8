mod csv;
mod fs_utils;
mod json;
mod model;

pub use model::WorkoutRow;

use crate::errors::AppResult;
use crate::models::Workout;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;
use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write `workouts` to `path` in the chosen format.
pub fn export_workouts(
    workouts: &[Workout],
    format: ExportFormat,
    path: &Path,
    force: bool,
) -> AppResult<()> {
    fs_utils::ensure_writable(path, force)?;

    match format {
        ExportFormat::Csv => csv::write_csv(path, workouts)?,
        ExportFormat::Json => json::write_json(path, workouts)?,
    }

    info!(format = format.as_str(), count = workouts.len(), path = %path.display(), "export written");
    success(format!(
        "{} export completed: {} workouts → {}",
        format.as_str().to_uppercase(),
        workouts.len(),
        path.display()
    ));
    Ok(())
}
