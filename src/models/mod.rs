//! Record types shared by the repository adapters and the view logic.

pub mod goal;
pub mod goal_type;
pub mod location;
pub mod workout;
pub mod workout_type;

use chrono::{DateTime, FixedOffset};

/// Timestamps keep the offset they were written with; calendar math uses
/// the wall-clock date in that offset.
pub type Timestamp = DateTime<FixedOffset>;

pub use goal::{Goal, GoalPatch, NewGoal};
pub use goal_type::GoalType;
pub use location::GeoPoint;
pub use workout::{NewWorkout, Workout, WorkoutPatch};
pub use workout_type::WorkoutType;
