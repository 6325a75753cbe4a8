use crate::models::Goal;
use serde::Serialize;

/// round(current / target × 100), clamped to 0..=100.
/// A non-positive or non-finite target has no meaningful progress and yields 0.
pub fn progress_percent(current: f64, target: f64) -> u8 {
    if !target.is_finite() || target <= 0.0 || !current.is_finite() {
        return 0;
    }
    (current / target * 100.0).round().clamp(0.0, 100.0) as u8
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub goal: Goal,
    pub percent: u8,
    pub achieved: bool,
}

impl GoalProgress {
    pub fn of(goal: Goal) -> Self {
        let percent = progress_percent(goal.current, goal.target);
        Self {
            goal,
            percent,
            achieved: percent >= 100,
        }
    }
}

pub fn goal_progress(goals: &[Goal]) -> Vec<GoalProgress> {
    goals.iter().cloned().map(GoalProgress::of).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_whole_percent() {
        assert_eq!(progress_percent(3.0, 5.0), 60);
        assert_eq!(progress_percent(12.5, 20.0), 63);
        assert_eq!(progress_percent(350.0, 500.0), 70);
        assert_eq!(progress_percent(1.0, 3.0), 33);
    }

    #[test]
    fn clamps_overshoot_to_100() {
        assert_eq!(progress_percent(12.0, 10.0), 100);
        assert_eq!(progress_percent(10.0, 10.0), 100);
    }

    #[test]
    fn never_negative() {
        assert_eq!(progress_percent(-5.0, 10.0), 0);
        assert_eq!(progress_percent(5.0, 0.0), 0);
        assert_eq!(progress_percent(5.0, f64::NAN), 0);
    }

    #[test]
    fn achieved_at_100() {
        assert!(progress_percent(9.96, 10.0) >= 100);
        assert!(progress_percent(9.94, 10.0) < 100);
    }
}
