use crate::errors::AppResult;
use crate::models::Workout;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Same shape as the backend rows.
pub fn write_json(path: &Path, workouts: &[Workout]) -> AppResult<()> {
    let mut out = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut out, workouts)?;
    out.write_all(b"\n")?;
    out.flush()?;
    Ok(())
}
