use super::{GeoPoint, Timestamp, WorkoutType};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single logged exercise session, as stored in the `workouts` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Workout {
    pub id: String,
    pub user_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    /// Minutes, always > 0.
    pub duration: u32,
    /// Kilometers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: Timestamp,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
    pub created_at: Timestamp,
}

impl Workout {
    /// Calendar date of the workout in the offset it was recorded with.
    pub fn local_date(&self) -> NaiveDate {
        self.date.date_naive()
    }

    /// Case-insensitive substring match on title or type.
    /// `needle` must already be lowercase.
    pub fn matches(&self, needle: &str) -> bool {
        self.title.to_lowercase().contains(needle) || self.kind.as_str().contains(needle)
    }
}

/// Insert payload: a workout without the store-assigned `id` and `created_at`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewWorkout {
    pub user_id: String,
    pub title: String,
    #[serde(rename = "type")]
    pub kind: WorkoutType,
    pub duration: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    pub calories: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub date: Timestamp,
    pub completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl NewWorkout {
    pub fn into_workout(self, id: String, created_at: Timestamp) -> Workout {
        Workout {
            id,
            user_id: self.user_id,
            title: self.title,
            kind: self.kind,
            duration: self.duration,
            distance: self.distance,
            calories: self.calories,
            notes: self.notes,
            date: self.date,
            completed: self.completed,
            location: self.location,
            created_at,
        }
    }
}

/// Partial update: only the fields that are `Some` are sent/applied.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkoutPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<WorkoutType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub calories: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<Timestamp>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<GeoPoint>,
}

impl WorkoutPatch {
    pub fn is_empty(&self) -> bool {
        *self == WorkoutPatch::default()
    }

    pub fn apply(&self, w: &mut Workout) {
        if let Some(v) = &self.title {
            w.title = v.clone();
        }
        if let Some(v) = &self.kind {
            w.kind = v.clone();
        }
        if let Some(v) = self.duration {
            w.duration = v;
        }
        if let Some(v) = self.distance {
            w.distance = Some(v);
        }
        if let Some(v) = self.calories {
            w.calories = v;
        }
        if let Some(v) = &self.notes {
            w.notes = Some(v.clone());
        }
        if let Some(v) = self.date {
            w.date = v;
        }
        if let Some(v) = self.completed {
            w.completed = v;
        }
        if let Some(v) = self.location {
            w.location = Some(v);
        }
    }
}
