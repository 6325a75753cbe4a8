use crate::errors::{AppError, AppResult};
use crate::models::{
    GeoPoint, Goal, GoalPatch, GoalType, Timestamp, Workout, WorkoutPatch, WorkoutType,
};
use chrono::{DateTime, SecondsFormat, Utc};
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

const WORKOUT_COLUMNS: &str = "id, user_id, title, type, duration, distance, calories, notes, \
     date, completed, latitude, longitude, created_at";

const GOAL_COLUMNS: &str = "id, user_id, title, target, current, unit, type, deadline, created_at";

/// Workout dates keep the offset they were recorded with.
pub fn format_date(ts: &Timestamp) -> String {
    ts.to_rfc3339_opts(SecondsFormat::AutoSi, false)
}

/// Creation times are normalised to UTC with fixed precision so that
/// text ordering matches time ordering.
pub fn format_created_at(ts: &Timestamp) -> String {
    ts.with_timezone(&Utc)
        .to_rfc3339_opts(SecondsFormat::Micros, true)
}

fn parse_ts(col: usize, raw: String) -> Result<Timestamp> {
    DateTime::parse_from_rfc3339(&raw).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            col,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidDate(raw.clone())),
        )
    })
}

pub fn map_workout_row(row: &Row) -> Result<Workout> {
    let kind: String = row.get("type")?;
    let date = parse_ts(8, row.get("date")?)?;
    let created_at = parse_ts(12, row.get("created_at")?)?;

    Ok(Workout {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        kind: WorkoutType::from_db_str(&kind),
        duration: row.get("duration")?,
        distance: row.get("distance")?,
        calories: row.get("calories")?,
        notes: row.get("notes")?,
        date,
        completed: row.get::<_, i32>("completed")? == 1,
        location: GeoPoint::from_columns(row.get("latitude")?, row.get("longitude")?),
        created_at,
    })
}

pub fn map_goal_row(row: &Row) -> Result<Goal> {
    let kind: String = row.get("type")?;
    let deadline = match row.get::<_, Option<String>>("deadline")? {
        Some(raw) => Some(parse_ts(7, raw)?),
        None => None,
    };

    Ok(Goal {
        id: row.get("id")?,
        user_id: row.get("user_id")?,
        title: row.get("title")?,
        target: row.get("target")?,
        current: row.get("current")?,
        unit: row.get("unit")?,
        kind: GoalType::from_db_str(&kind),
        deadline,
        created_at: parse_ts(8, row.get("created_at")?)?,
    })
}

// ---------------------------
// Workouts
// ---------------------------

/// All workouts of `user_id`, newest first.
pub fn list_workouts(conn: &Connection, user_id: &str) -> AppResult<Vec<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WORKOUT_COLUMNS} FROM workouts
         WHERE user_id = ?1
         ORDER BY created_at DESC, rowid DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_workout_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_workout(conn: &Connection, user_id: &str, id: &str) -> AppResult<Option<Workout>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {WORKOUT_COLUMNS} FROM workouts WHERE user_id = ?1 AND id = ?2"
    ))?;
    Ok(stmt
        .query_row(params![user_id, id], map_workout_row)
        .optional()?)
}

pub fn insert_workout(conn: &Connection, w: &Workout) -> AppResult<()> {
    conn.execute(
        &format!(
            "INSERT INTO workouts ({WORKOUT_COLUMNS})
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13)"
        ),
        params![
            w.id,
            w.user_id,
            w.title,
            w.kind.as_str(),
            w.duration,
            w.distance,
            w.calories,
            w.notes,
            format_date(&w.date),
            if w.completed { 1 } else { 0 },
            w.location.map(|l| l.latitude),
            w.location.map(|l| l.longitude),
            format_created_at(&w.created_at),
        ],
    )?;
    Ok(())
}

/// Apply `patch` to the stored row and return the updated workout.
pub fn update_workout(
    conn: &Connection,
    user_id: &str,
    id: &str,
    patch: &WorkoutPatch,
) -> AppResult<Workout> {
    let mut w = get_workout(conn, user_id, id)?.ok_or_else(|| AppError::not_found("workout", id))?;
    patch.apply(&mut w);

    conn.execute(
        "UPDATE workouts
         SET title = ?3, type = ?4, duration = ?5, distance = ?6, calories = ?7,
             notes = ?8, date = ?9, completed = ?10, latitude = ?11, longitude = ?12
         WHERE user_id = ?1 AND id = ?2",
        params![
            user_id,
            id,
            w.title,
            w.kind.as_str(),
            w.duration,
            w.distance,
            w.calories,
            w.notes,
            format_date(&w.date),
            if w.completed { 1 } else { 0 },
            w.location.map(|l| l.latitude),
            w.location.map(|l| l.longitude),
        ],
    )?;
    Ok(w)
}

/// Returns false when no row matched.
pub fn delete_workout(conn: &Connection, user_id: &str, id: &str) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM workouts WHERE user_id = ?1 AND id = ?2",
        params![user_id, id],
    )?;
    Ok(n > 0)
}

// ---------------------------
// Goals
// ---------------------------

pub fn list_goals(conn: &Connection, user_id: &str) -> AppResult<Vec<Goal>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {GOAL_COLUMNS} FROM goals
         WHERE user_id = ?1
         ORDER BY created_at DESC, rowid DESC"
    ))?;

    let rows = stmt.query_map([user_id], map_goal_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn get_goal(conn: &Connection, user_id: &str, id: &str) -> AppResult<Option<Goal>> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {GOAL_COLUMNS} FROM goals WHERE user_id = ?1 AND id = ?2"
    ))?;
    Ok(stmt.query_row(params![user_id, id], map_goal_row).optional()?)
}

pub fn insert_goal(conn: &Connection, g: &Goal) -> AppResult<()> {
    conn.execute(
        &format!("INSERT INTO goals ({GOAL_COLUMNS}) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)"),
        params![
            g.id,
            g.user_id,
            g.title,
            g.target,
            g.current,
            g.unit,
            g.kind.as_str(),
            g.deadline.as_ref().map(format_date),
            format_created_at(&g.created_at),
        ],
    )?;
    Ok(())
}

pub fn update_goal(conn: &Connection, user_id: &str, id: &str, patch: &GoalPatch) -> AppResult<Goal> {
    let mut g = get_goal(conn, user_id, id)?.ok_or_else(|| AppError::not_found("goal", id))?;
    patch.apply(&mut g);

    conn.execute(
        "UPDATE goals
         SET title = ?3, target = ?4, current = ?5, unit = ?6, type = ?7, deadline = ?8
         WHERE user_id = ?1 AND id = ?2",
        params![
            user_id,
            id,
            g.title,
            g.target,
            g.current,
            g.unit,
            g.kind.as_str(),
            g.deadline.as_ref().map(format_date),
        ],
    )?;
    Ok(g)
}

pub fn delete_goal(conn: &Connection, user_id: &str, id: &str) -> AppResult<bool> {
    let n = conn.execute(
        "DELETE FROM goals WHERE user_id = ?1 AND id = ?2",
        params![user_id, id],
    )?;
    Ok(n > 0)
}
