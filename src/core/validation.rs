//! Submission validation for workouts and goals.
//!
//! Drafts carry the raw text the user typed. Every rule is checked and all
//! violations are reported together, keyed by field, so the caller can show
//! them next to the offending inputs. Nothing is submitted while any remain.

use crate::models::{GoalType, WorkoutType};
use crate::utils::date::parse_date;
use chrono::NaiveDate;
use std::fmt;

/// Field name → message, in the order the fields were checked.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(Vec<(&'static str, String)>);

impl FieldErrors {
    /// Record an error; a later message for the same field replaces the earlier one.
    pub fn insert(&mut self, field: &'static str, message: impl Into<String>) {
        let message = message.into();
        match self.0.iter_mut().find(|(f, _)| *f == field) {
            Some(entry) => entry.1 = message,
            None => self.0.push((field, message)),
        }
    }

    pub fn get(&self, field: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, m)| m.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }

    fn into_result<T>(self, value: T) -> Result<T, FieldErrors> {
        if self.is_empty() { Ok(value) } else { Err(self) }
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.iter().map(|(k, v)| format!("{k}: {v}")).collect();
        f.write_str(&parts.join("; "))
    }
}

fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| v.is_finite())
}

fn non_empty(raw: &str) -> Option<String> {
    let t = raw.trim();
    (!t.is_empty()).then(|| t.to_string())
}

/// Raw workout form input.
#[derive(Debug, Clone, Default)]
pub struct WorkoutDraft {
    pub title: String,
    /// Empty means the form default (running).
    pub kind: String,
    pub duration: String,
    pub distance: String,
    pub calories: String,
    pub notes: String,
    /// Optional backfill date (YYYY-MM-DD); empty means "now".
    pub date: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidWorkout {
    pub title: String,
    pub kind: WorkoutType,
    pub duration: u32,
    pub distance: Option<f64>,
    pub calories: u32,
    pub notes: Option<String>,
    pub date: Option<NaiveDate>,
}

impl WorkoutDraft {
    pub fn validate(&self) -> Result<ValidWorkout, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = non_empty(&self.title);
        if title.is_none() {
            errors.insert("title", "Workout title is required");
        }

        let kind = match non_empty(&self.kind) {
            Some(k) => WorkoutType::from_db_str(&k),
            None => WorkoutType::Running,
        };

        let mut duration = 0;
        if self.duration.trim().is_empty() {
            errors.insert("duration", "Duration is required");
        } else {
            match parse_number(&self.duration).map(f64::round) {
                Some(v) if v > 0.0 && v <= u32::MAX as f64 => duration = v as u32,
                _ => errors.insert("duration", "Duration must be a positive number"),
            }
        }

        let mut distance = None;
        if !self.distance.trim().is_empty() {
            match parse_number(&self.distance) {
                Some(v) if v >= 0.0 => distance = Some(v),
                _ => errors.insert("distance", "Distance must be a positive number"),
            }
        }

        let mut calories = 0;
        if self.calories.trim().is_empty() {
            errors.insert("calories", "Calories is required");
        } else {
            match parse_number(&self.calories).map(f64::round) {
                Some(v) if v >= 0.0 && v <= u32::MAX as f64 => calories = v as u32,
                _ => errors.insert("calories", "Calories must be a positive number"),
            }
        }

        let mut date = None;
        if !self.date.trim().is_empty() {
            match parse_date(&self.date) {
                Some(d) => date = Some(d),
                None => errors.insert("date", "Date must be in YYYY-MM-DD format"),
            }
        }

        errors.into_result(ValidWorkout {
            title: title.unwrap_or_default(),
            kind,
            duration,
            distance,
            calories,
            notes: non_empty(&self.notes),
            date,
        })
    }
}

/// Raw goal form input.
#[derive(Debug, Clone, Default)]
pub struct GoalDraft {
    pub title: String,
    pub kind: String,
    pub target: String,
    /// Empty means 0.
    pub current: String,
    pub unit: String,
    pub deadline: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidGoal {
    pub title: String,
    pub kind: GoalType,
    pub target: f64,
    pub current: f64,
    pub unit: String,
    pub deadline: Option<NaiveDate>,
}

impl GoalDraft {
    pub fn validate(&self) -> Result<ValidGoal, FieldErrors> {
        let mut errors = FieldErrors::default();

        let title = non_empty(&self.title);
        if title.is_none() {
            errors.insert("title", "Goal title is required");
        }

        let mut target = 0.0;
        if self.target.trim().is_empty() {
            errors.insert("target", "Target is required");
        } else {
            match parse_number(&self.target) {
                Some(v) if v > 0.0 => target = v,
                _ => errors.insert("target", "Target must be a positive number"),
            }
        }

        let current = match validate_progress(&self.current) {
            Ok(v) => v,
            Err(msg) => {
                errors.insert("current", msg);
                0.0
            }
        };

        let unit = non_empty(&self.unit);
        if unit.is_none() {
            errors.insert("unit", "Unit is required");
        }

        let mut deadline = None;
        if !self.deadline.trim().is_empty() {
            match parse_date(&self.deadline) {
                Some(d) => deadline = Some(d),
                None => errors.insert("deadline", "Deadline must be in YYYY-MM-DD format"),
            }
        }

        errors.into_result(ValidGoal {
            title: title.unwrap_or_default(),
            kind: GoalType::from_db_str(&self.kind),
            target,
            current,
            unit: unit.unwrap_or_default(),
            deadline,
        })
    }
}

/// Parse a progress value; empty input counts as 0.
pub fn validate_progress(raw: &str) -> Result<f64, &'static str> {
    if raw.trim().is_empty() {
        return Ok(0.0);
    }
    match parse_number(raw) {
        Some(v) if v >= 0.0 => Ok(v),
        _ => Err("Progress must be a positive number"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> WorkoutDraft {
        WorkoutDraft {
            title: "Morning Run".into(),
            kind: "Running".into(),
            duration: "45".into(),
            distance: "5.2".into(),
            calories: "420".into(),
            ..Default::default()
        }
    }

    #[test]
    fn valid_workout_draft() {
        let w = draft().validate().unwrap();
        assert_eq!(w.title, "Morning Run");
        assert_eq!(w.kind, WorkoutType::Running);
        assert_eq!(w.duration, 45);
        assert_eq!(w.distance, Some(5.2));
        assert_eq!(w.calories, 420);
        assert_eq!(w.notes, None);
        assert_eq!(w.date, None);
    }

    #[test]
    fn empty_form_reports_every_required_field() {
        let errors = WorkoutDraft::default().validate().unwrap_err();
        assert_eq!(errors.get("title"), Some("Workout title is required"));
        assert_eq!(errors.get("duration"), Some("Duration is required"));
        assert_eq!(errors.get("calories"), Some("Calories is required"));
        assert_eq!(errors.get("distance"), None);
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn rejects_non_numeric_and_negative_values() {
        let mut d = draft();
        d.duration = "0".into();
        d.distance = "-1".into();
        d.calories = "lots".into();
        let errors = d.validate().unwrap_err();
        assert_eq!(
            errors.get("duration"),
            Some("Duration must be a positive number")
        );
        assert_eq!(
            errors.get("distance"),
            Some("Distance must be a positive number")
        );
        assert_eq!(
            errors.get("calories"),
            Some("Calories must be a positive number")
        );
    }

    #[test]
    fn zero_calories_and_distance_are_allowed() {
        let mut d = draft();
        d.calories = "0".into();
        d.distance = "0".into();
        let w = d.validate().unwrap();
        assert_eq!(w.calories, 0);
        assert_eq!(w.distance, Some(0.0));
    }

    #[test]
    fn non_finite_numbers_are_rejected() {
        let mut d = draft();
        d.duration = "inf".into();
        assert!(d.validate().unwrap_err().get("duration").is_some());
    }

    #[test]
    fn default_type_is_running() {
        let mut d = draft();
        d.kind = "  ".into();
        assert_eq!(d.validate().unwrap().kind, WorkoutType::Running);
    }

    #[test]
    fn bad_backfill_date() {
        let mut d = draft();
        d.date = "15/01/2024".into();
        let errors = d.validate().unwrap_err();
        assert_eq!(errors.get("date"), Some("Date must be in YYYY-MM-DD format"));
    }

    #[test]
    fn goal_rules() {
        let g = GoalDraft {
            title: "Weekly Distance".into(),
            kind: "distance".into(),
            target: "20".into(),
            current: "".into(),
            unit: "km".into(),
            deadline: "2024-12-31".into(),
        }
        .validate()
        .unwrap();
        assert_eq!(g.kind, GoalType::Distance);
        assert_eq!(g.current, 0.0);
        assert_eq!(g.deadline, NaiveDate::from_ymd_opt(2024, 12, 31));

        let errors = GoalDraft {
            target: "0".into(),
            current: "-3".into(),
            ..Default::default()
        }
        .validate()
        .unwrap_err();
        assert_eq!(errors.get("title"), Some("Goal title is required"));
        assert_eq!(errors.get("target"), Some("Target must be a positive number"));
        assert_eq!(
            errors.get("current"),
            Some("Progress must be a positive number")
        );
        assert_eq!(errors.get("unit"), Some("Unit is required"));
    }

    #[test]
    fn display_joins_fields_in_check_order() {
        let errors = WorkoutDraft::default().validate().unwrap_err();
        assert_eq!(
            errors.to_string(),
            "title: Workout title is required; duration: Duration is required; calories: Calories is required"
        );
    }
}
