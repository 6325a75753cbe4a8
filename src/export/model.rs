use crate::db::queries::{format_created_at, format_date};
use crate::models::Workout;
use serde::Serialize;

/// Flat workout row for tabular exports.
#[derive(Debug, Serialize)]
pub struct WorkoutRow {
    pub id: String,
    pub date: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub duration: u32,
    pub distance: Option<f64>,
    pub calories: u32,
    pub completed: bool,
    pub notes: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub created_at: String,
}

impl From<&Workout> for WorkoutRow {
    fn from(w: &Workout) -> Self {
        Self {
            id: w.id.clone(),
            date: format_date(&w.date),
            title: w.title.clone(),
            kind: w.kind.as_str().to_string(),
            duration: w.duration,
            distance: w.distance,
            calories: w.calories,
            completed: w.completed,
            notes: w.notes.clone().unwrap_or_default(),
            latitude: w.location.map(|l| l.latitude),
            longitude: w.location.map(|l| l.longitude),
            created_at: format_created_at(&w.created_at),
        }
    }
}
