/// ANSI color helper utilities for terminal output.
use crate::models::{GoalType, WorkoutType};

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const BLUE: &str = "\x1b[34m";
pub const MAGENTA: &str = "\x1b[35m";
pub const CYAN: &str = "\x1b[36m";

/// Accent for workout types, same palette roles as the mobile cards:
/// running = success, cycling = primary, gym = secondary, swimming = info,
/// walking = warning, everything else = accent.
pub fn color_for_workout_type(kind: &WorkoutType) -> &'static str {
    match kind {
        WorkoutType::Running => GREEN,
        WorkoutType::Cycling => BLUE,
        WorkoutType::Gym => MAGENTA,
        WorkoutType::Swimming => CYAN,
        WorkoutType::Walking => YELLOW,
        _ => GREY,
    }
}

pub fn color_for_goal_type(kind: GoalType) -> &'static str {
    match kind {
        GoalType::Workout => BLUE,
        GoalType::Distance => MAGENTA,
        GoalType::Calories => RED,
        GoalType::Steps => CYAN,
        GoalType::Weight => YELLOW,
        GoalType::Custom => GREY,
    }
}

/// Progress color: achieved → green, half way → yellow, otherwise reset.
pub fn color_for_progress(percent: u8) -> &'static str {
    if percent >= 100 {
        GREEN
    } else if percent >= 50 {
        YELLOW
    } else {
        RESET
    }
}

/// Wrap `value` in `color` unless colors are disabled.
pub fn paint(value: &str, color: &str, enabled: bool) -> String {
    if enabled {
        format!("{color}{value}{RESET}")
    } else {
        value.to_string()
    }
}
