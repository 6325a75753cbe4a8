//! Persistence boundary for workouts and goals.
//!
//! Aggregation and grouping only ever see the record lists these traits
//! return, so the concrete backend can be swapped without touching them.
//! Every adapter is bound to one user at construction time.

mod memory;
mod remote;
mod sqlite;

pub use memory::MemoryRepository;
pub use remote::RemoteRepository;
pub use sqlite::SqliteRepository;

use crate::config::{Backend, Config};
use crate::errors::AppResult;
use crate::models::{Goal, GoalPatch, NewGoal, NewWorkout, Workout, WorkoutPatch};
use crate::session::Session;
use tracing::debug;

pub trait WorkoutStore: Send + Sync {
    /// The current user's workouts, newest `created_at` first.
    fn list_workouts(&self) -> AppResult<Vec<Workout>>;
    fn create_workout(&self, new: NewWorkout) -> AppResult<Workout>;
    fn update_workout(&self, id: &str, patch: &WorkoutPatch) -> AppResult<Workout>;
    fn delete_workout(&self, id: &str) -> AppResult<()>;
}

pub trait GoalStore: Send + Sync {
    /// The current user's goals, newest `created_at` first.
    fn list_goals(&self) -> AppResult<Vec<Goal>>;
    fn create_goal(&self, new: NewGoal) -> AppResult<Goal>;
    fn update_goal(&self, id: &str, patch: &GoalPatch) -> AppResult<Goal>;
    fn delete_goal(&self, id: &str) -> AppResult<()>;
}

pub trait Repository: WorkoutStore + GoalStore {
    /// Short adapter name for logs.
    fn backend_name(&self) -> &'static str;
}

/// Build the adapter selected in the configuration.
pub fn connect(cfg: &Config, session: &Session) -> AppResult<Box<dyn Repository>> {
    cfg.check()?;
    debug!(backend = ?cfg.backend, user = session.user_id(), "connecting repository");
    match cfg.backend {
        Backend::Local => Ok(Box::new(SqliteRepository::open(&cfg.database, session)?)),
        Backend::Remote => Ok(Box::new(RemoteRepository::new(&cfg.remote, session)?)),
    }
}
