//! Turning validated form input into persisted records.

use crate::core::validation::{FieldErrors, GoalDraft, WorkoutDraft, validate_progress};
use crate::errors::{AppError, AppResult};
use crate::location::{LocationProvider, try_locate};
use crate::models::{Goal, GoalPatch, NewGoal, NewWorkout, Timestamp, Workout, WorkoutPatch};
use crate::repository::{GoalStore, WorkoutStore};
use crate::session::Session;
use crate::utils::date::at_local_noon;
use tracing::info;

/// Validate `draft` and create the workout. `completed` is always set; the
/// date is `now` unless the draft names a day. A location is attached only
/// when a provider is passed and yields one.
pub fn submit_workout<R: WorkoutStore + ?Sized>(
    repo: &R,
    session: &Session,
    draft: &WorkoutDraft,
    locator: Option<&mut dyn LocationProvider>,
    now: Timestamp,
) -> AppResult<Workout> {
    let valid = draft.validate().map_err(AppError::Validation)?;

    let date = match valid.date {
        Some(d) => at_local_noon(d)?,
        None => now,
    };
    let location = locator.and_then(try_locate);

    let new = NewWorkout {
        user_id: session.user_id().to_string(),
        title: valid.title,
        kind: valid.kind,
        duration: valid.duration,
        distance: valid.distance,
        calories: valid.calories,
        notes: valid.notes,
        date,
        completed: true,
        location,
    };

    let w = repo.create_workout(new)?;
    info!(id = %w.id, kind = %w.kind, "workout saved");
    Ok(w)
}

/// Optional replacements for an existing workout. `None` keeps the field.
#[derive(Debug, Clone, Default)]
pub struct WorkoutEdit {
    pub title: Option<String>,
    pub kind: Option<String>,
    pub duration: Option<String>,
    pub distance: Option<String>,
    pub calories: Option<String>,
    pub notes: Option<String>,
    pub date: Option<String>,
    pub completed: Option<bool>,
}

/// Re-validate the merged record with the same rules as a new submission,
/// then send only the fields that were given.
pub fn edit_workout<R: WorkoutStore + ?Sized>(
    repo: &R,
    id: &str,
    edit: &WorkoutEdit,
) -> AppResult<Workout> {
    let current = repo
        .list_workouts()?
        .into_iter()
        .find(|w| w.id == id)
        .ok_or_else(|| AppError::not_found("workout", id))?;

    let pick = |new: &Option<String>, old: String| new.clone().unwrap_or(old);
    let draft = WorkoutDraft {
        title: pick(&edit.title, current.title.clone()),
        kind: pick(&edit.kind, current.kind.to_string()),
        duration: pick(&edit.duration, current.duration.to_string()),
        distance: pick(
            &edit.distance,
            current.distance.map(|d| d.to_string()).unwrap_or_default(),
        ),
        calories: pick(&edit.calories, current.calories.to_string()),
        notes: pick(&edit.notes, current.notes.clone().unwrap_or_default()),
        date: edit.date.clone().unwrap_or_default(),
    };
    let valid = draft.validate().map_err(AppError::Validation)?;

    let mut patch = WorkoutPatch {
        completed: edit.completed,
        ..Default::default()
    };
    if edit.title.is_some() {
        patch.title = Some(valid.title);
    }
    if edit.kind.is_some() {
        patch.kind = Some(valid.kind);
    }
    if edit.duration.is_some() {
        patch.duration = Some(valid.duration);
    }
    if edit.distance.is_some() {
        patch.distance = valid.distance;
    }
    if edit.calories.is_some() {
        patch.calories = Some(valid.calories);
    }
    if edit.notes.is_some() {
        patch.notes = valid.notes;
    }
    if let Some(d) = valid.date {
        patch.date = Some(at_local_noon(d)?);
    }

    if patch.is_empty() {
        return Ok(current);
    }
    repo.update_workout(id, &patch)
}

pub fn submit_goal<R: GoalStore + ?Sized>(
    repo: &R,
    session: &Session,
    draft: &GoalDraft,
) -> AppResult<Goal> {
    let valid = draft.validate().map_err(AppError::Validation)?;
    let deadline = valid.deadline.map(at_local_noon).transpose()?;

    let new = NewGoal {
        user_id: session.user_id().to_string(),
        title: valid.title,
        target: valid.target,
        current: valid.current,
        unit: valid.unit,
        kind: valid.kind,
        deadline,
    };

    let g = repo.create_goal(new)?;
    info!(id = %g.id, kind = %g.kind, "goal saved");
    Ok(g)
}

/// Set the goal's current value.
pub fn record_goal_progress<R: GoalStore + ?Sized>(
    repo: &R,
    id: &str,
    raw: &str,
) -> AppResult<Goal> {
    let current = validate_progress(raw).map_err(|msg| {
        let mut errors = FieldErrors::default();
        errors.insert("current", msg);
        AppError::Validation(errors)
    })?;

    let patch = GoalPatch {
        current: Some(current),
        ..Default::default()
    };
    repo.update_goal(id, &patch)
}
