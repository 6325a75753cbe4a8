use super::{GoalStore, Repository, WorkoutStore};
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, GoalPatch, NewGoal, NewWorkout, Workout, WorkoutPatch};
use crate::session::Session;
use crate::utils::date::now;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// In-process store with the same semantics as the persistent adapters.
#[derive(Debug, Default)]
pub struct MemoryRepository {
    user_id: String,
    workouts: Mutex<Vec<Workout>>,
    goals: Mutex<Vec<Goal>>,
}

fn lock<T>(m: &Mutex<T>) -> AppResult<MutexGuard<'_, T>> {
    m.lock()
        .map_err(|_| AppError::Other("memory store lock poisoned".into()))
}

/// Newest first; later insertions win ties.
fn newest_first<T: Clone>(items: &[T], created: impl Fn(&T) -> crate::models::Timestamp) -> Vec<T> {
    let mut out: Vec<T> = items.iter().rev().cloned().collect();
    out.sort_by_key(|item| std::cmp::Reverse(created(item)));
    out
}

impl MemoryRepository {
    pub fn new(session: &Session) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            ..Default::default()
        }
    }

    /// Seed records as-is, including ones owned by other users.
    pub fn with_records(session: &Session, workouts: Vec<Workout>, goals: Vec<Goal>) -> Self {
        Self {
            user_id: session.user_id().to_string(),
            workouts: Mutex::new(workouts),
            goals: Mutex::new(goals),
        }
    }
}

impl WorkoutStore for MemoryRepository {
    fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        let all = lock(&self.workouts)?;
        let mine: Vec<Workout> = all
            .iter()
            .filter(|w| w.user_id == self.user_id)
            .cloned()
            .collect();
        Ok(newest_first(&mine, |w| w.created_at))
    }

    fn create_workout(&self, mut new: NewWorkout) -> AppResult<Workout> {
        new.user_id = self.user_id.clone();
        let w = new.into_workout(Uuid::new_v4().to_string(), now());
        lock(&self.workouts)?.push(w.clone());
        Ok(w)
    }

    fn update_workout(&self, id: &str, patch: &WorkoutPatch) -> AppResult<Workout> {
        let mut all = lock(&self.workouts)?;
        let w = all
            .iter_mut()
            .find(|w| w.id == id && w.user_id == self.user_id)
            .ok_or_else(|| AppError::not_found("workout", id))?;
        patch.apply(w);
        Ok(w.clone())
    }

    fn delete_workout(&self, id: &str) -> AppResult<()> {
        let mut all = lock(&self.workouts)?;
        let before = all.len();
        all.retain(|w| !(w.id == id && w.user_id == self.user_id));
        if all.len() == before {
            return Err(AppError::not_found("workout", id));
        }
        Ok(())
    }
}

impl GoalStore for MemoryRepository {
    fn list_goals(&self) -> AppResult<Vec<Goal>> {
        let all = lock(&self.goals)?;
        let mine: Vec<Goal> = all
            .iter()
            .filter(|g| g.user_id == self.user_id)
            .cloned()
            .collect();
        Ok(newest_first(&mine, |g| g.created_at))
    }

    fn create_goal(&self, mut new: NewGoal) -> AppResult<Goal> {
        new.user_id = self.user_id.clone();
        let g = new.into_goal(Uuid::new_v4().to_string(), now());
        lock(&self.goals)?.push(g.clone());
        Ok(g)
    }

    fn update_goal(&self, id: &str, patch: &GoalPatch) -> AppResult<Goal> {
        let mut all = lock(&self.goals)?;
        let g = all
            .iter_mut()
            .find(|g| g.id == id && g.user_id == self.user_id)
            .ok_or_else(|| AppError::not_found("goal", id))?;
        patch.apply(g);
        Ok(g.clone())
    }

    fn delete_goal(&self, id: &str) -> AppResult<()> {
        let mut all = lock(&self.goals)?;
        let before = all.len();
        all.retain(|g| !(g.id == id && g.user_id == self.user_id));
        if all.len() == before {
            return Err(AppError::not_found("goal", id));
        }
        Ok(())
    }
}

impl Repository for MemoryRepository {
    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
