use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::submit::{WorkoutEdit, edit_workout};
use crate::errors::AppResult;
use crate::repository;
use crate::session::Session;
use crate::ui::messages::success;

pub fn handle(cmd: &Commands, cfg: &Config, session: &Session) -> AppResult<()> {
    if let Commands::Edit {
        id,
        title,
        kind,
        duration,
        distance,
        calories,
        notes,
        date,
        completed,
    } = cmd
    {
        let edit = WorkoutEdit {
            title: title.clone(),
            kind: kind.clone(),
            duration: duration.clone(),
            distance: distance.clone(),
            calories: calories.clone(),
            notes: notes.clone(),
            date: date.clone(),
            completed: *completed,
        };

        let repo = repository::connect(cfg, session)?;
        let w = edit_workout(repo.as_ref(), id, &edit)?;
        success(format!("Workout '{}' updated.", w.title));
    }

    Ok(())
}
