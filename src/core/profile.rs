use crate::core::sample::{SAMPLE_ACHIEVEMENTS, SAMPLE_GOALS_COUNT, SAMPLE_WORKOUTS_COUNT};
use serde::Serialize;

pub const MAX_ACHIEVEMENTS: usize = 20;

/// Counters shown on the profile screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub workouts: usize,
    pub goals: usize,
    /// One per three workouts plus one per two goals, capped.
    pub achievements: usize,
}

impl ProfileStats {
    pub fn compute(workouts: usize, goals: usize) -> Self {
        Self {
            workouts,
            goals,
            achievements: (workouts / 3 + goals / 2).min(MAX_ACHIEVEMENTS),
        }
    }

    pub fn sample() -> Self {
        Self {
            workouts: SAMPLE_WORKOUTS_COUNT,
            goals: SAMPLE_GOALS_COUNT,
            achievements: SAMPLE_ACHIEVEMENTS,
        }
    }
}
