//! Built-in records shown in development builds when the store is unreachable.

use crate::models::{Goal, GoalType, Timestamp, Workout, WorkoutType};
use crate::utils::date::at_local_noon;
use chrono::{Days, NaiveDate, NaiveTime, TimeZone, Utc};

pub const SAMPLE_WORKOUTS_COUNT: usize = 28;
pub const SAMPLE_GOALS_COUNT: usize = 4;
pub const SAMPLE_ACHIEVEMENTS: usize = 12;

fn noon(d: NaiveDate) -> Timestamp {
    at_local_noon(d).unwrap_or_else(|_| Utc.from_utc_datetime(&d.and_time(NaiveTime::MIN)).fixed_offset())
}

fn days_ago(today: NaiveDate, n: u64) -> NaiveDate {
    today.checked_sub_days(Days::new(n)).unwrap_or(today)
}

#[allow(clippy::too_many_arguments)]
fn sample(
    id: &str,
    kind: WorkoutType,
    title: &str,
    day: NaiveDate,
    duration: u32,
    distance: Option<f64>,
    calories: u32,
    user_id: &str,
    created_at: Timestamp,
) -> Workout {
    Workout {
        id: id.to_string(),
        user_id: user_id.to_string(),
        title: title.to_string(),
        kind,
        duration,
        distance,
        calories,
        notes: None,
        date: noon(day),
        completed: true,
        location: None,
        created_at,
    }
}

/// Seven workouts spread over the last two weeks, relative to `today`.
pub fn sample_workouts(today: NaiveDate, user_id: &str, created_at: Timestamp) -> Vec<Workout> {
    use WorkoutType::*;
    let rows: [(&str, WorkoutType, &str, u64, u32, Option<f64>, u32); 7] = [
        ("1", Running, "Morning Run", 0, 45, Some(5.2), 420),
        ("2", Gym, "Upper Body Workout", 1, 60, None, 350),
        ("3", Cycling, "Evening Ride", 2, 75, Some(18.5), 480),
        ("4", Swimming, "Pool Session", 6, 40, Some(1.5), 300),
        ("5", Running, "Trail Run", 6, 55, Some(6.8), 520),
        ("6", Walking, "City Walk", 13, 90, Some(8.2), 380),
        ("7", Gym, "Leg Day", 13, 70, None, 400),
    ];

    rows.into_iter()
        .map(|(id, kind, title, ago, duration, distance, calories)| {
            sample(
                id,
                kind,
                title,
                days_ago(today, ago),
                duration,
                distance,
                calories,
                user_id,
                created_at,
            )
        })
        .collect()
}

pub fn sample_goals(user_id: &str, created_at: Timestamp) -> Vec<Goal> {
    let rows = [
        ("1", "Weekly Workouts", 5.0, 3.0, "workouts", GoalType::Workout),
        ("2", "Weekly Distance", 20.0, 12.5, "km", GoalType::Distance),
        ("3", "Daily Calories Burned", 500.0, 350.0, "cal", GoalType::Calories),
    ];

    rows.into_iter()
        .map(|(id, title, target, current, unit, kind)| Goal {
            id: id.to_string(),
            user_id: user_id.to_string(),
            title: title.to_string(),
            target,
            current,
            unit: unit.to_string(),
            kind,
            deadline: None,
            created_at,
        })
        .collect()
}
