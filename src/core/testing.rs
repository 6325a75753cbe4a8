//! Record builders shared by the unit tests.

use crate::models::{Goal, GoalType, Timestamp, Workout, WorkoutType};
use chrono::{DateTime, NaiveDate};

pub fn noon_utc(d: NaiveDate) -> Timestamp {
    let naive = d.and_hms_opt(12, 0, 0).unwrap();
    DateTime::from_naive_utc_and_offset(naive, chrono::FixedOffset::east_opt(0).unwrap())
}

pub fn workout(id: &str, title: &str, kind: WorkoutType, day: NaiveDate) -> Workout {
    Workout {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        title: title.to_string(),
        kind,
        duration: 30,
        distance: None,
        calories: 200,
        notes: None,
        date: noon_utc(day),
        completed: true,
        location: None,
        created_at: noon_utc(day),
    }
}

pub fn workout_on(id: &str, day: NaiveDate, duration: u32, calories: u32) -> Workout {
    Workout {
        duration,
        calories,
        ..workout(id, "Session", WorkoutType::Gym, day)
    }
}

pub fn goal(id: &str, current: f64, target: f64) -> Goal {
    Goal {
        id: id.to_string(),
        user_id: "u-1".to_string(),
        title: format!("Goal {id}"),
        target,
        current,
        unit: "km".to_string(),
        kind: GoalType::Distance,
        deadline: None,
        created_at: noon_utc(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()),
    }
}
