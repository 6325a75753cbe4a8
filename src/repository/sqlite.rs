use super::{GoalStore, Repository, WorkoutStore};
use crate::db::initialize::{init_db, open_db};
use crate::db::log::{LogEntry, load_log, ttlog};
use crate::db::pool::DbPool;
use crate::db::queries;
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, GoalPatch, NewGoal, NewWorkout, Timestamp, Workout, WorkoutPatch};
use crate::session::Session;
use crate::utils::date::now;
use chrono::SubsecRound;
use rusqlite::Connection;
use std::sync::{Mutex, MutexGuard};
use uuid::Uuid;

/// Local adapter on an embedded SQLite file.
pub struct SqliteRepository {
    pool: Mutex<DbPool>,
    user_id: String,
}

impl SqliteRepository {
    pub fn open(path: &str, session: &Session) -> AppResult<Self> {
        let pool = open_db(path)?;
        Ok(Self::from_pool(pool, session))
    }

    pub fn in_memory(session: &Session) -> AppResult<Self> {
        let pool = DbPool::in_memory()?;
        init_db(&pool.conn)?;
        Ok(Self::from_pool(pool, session))
    }

    fn from_pool(pool: DbPool, session: &Session) -> Self {
        Self {
            pool: Mutex::new(pool),
            user_id: session.user_id().to_string(),
        }
    }

    fn lock(&self) -> AppResult<MutexGuard<'_, DbPool>> {
        self.pool
            .lock()
            .map_err(|_| AppError::Other("database lock poisoned".into()))
    }

    fn with_conn<T>(&self, f: impl FnOnce(&Connection) -> AppResult<T>) -> AppResult<T> {
        let pool = self.lock()?;
        f(&pool.conn)
    }

    /// Record an entry in the audit trail.
    pub fn audit(&self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.with_conn(|conn| ttlog(conn, operation, target, message))
    }

    pub fn audit_log(&self, limit: Option<usize>) -> AppResult<Vec<LogEntry>> {
        self.with_conn(|conn| load_log(conn, limit))
    }
}

/// Creation stamps are stored at microsecond precision.
fn created_now() -> Timestamp {
    now().trunc_subsecs(6)
}

impl WorkoutStore for SqliteRepository {
    fn list_workouts(&self) -> AppResult<Vec<Workout>> {
        self.with_conn(|conn| queries::list_workouts(conn, &self.user_id))
    }

    fn create_workout(&self, mut new: NewWorkout) -> AppResult<Workout> {
        new.user_id = self.user_id.clone();
        let w = new.into_workout(Uuid::new_v4().to_string(), created_now());
        self.with_conn(|conn| {
            queries::insert_workout(conn, &w)?;
            ttlog(conn, "add", &w.id, &format!("Added workout '{}'", w.title))
        })?;
        Ok(w)
    }

    fn update_workout(&self, id: &str, patch: &WorkoutPatch) -> AppResult<Workout> {
        self.with_conn(|conn| {
            let w = queries::update_workout(conn, &self.user_id, id, patch)?;
            ttlog(conn, "edit", id, &format!("Updated workout '{}'", w.title))?;
            Ok(w)
        })
    }

    fn delete_workout(&self, id: &str) -> AppResult<()> {
        self.with_conn(|conn| {
            if !queries::delete_workout(conn, &self.user_id, id)? {
                return Err(AppError::not_found("workout", id));
            }
            ttlog(conn, "del", id, "Deleted workout")
        })
    }
}

impl GoalStore for SqliteRepository {
    fn list_goals(&self) -> AppResult<Vec<Goal>> {
        self.with_conn(|conn| queries::list_goals(conn, &self.user_id))
    }

    fn create_goal(&self, mut new: NewGoal) -> AppResult<Goal> {
        new.user_id = self.user_id.clone();
        let g = new.into_goal(Uuid::new_v4().to_string(), created_now());
        self.with_conn(|conn| {
            queries::insert_goal(conn, &g)?;
            ttlog(conn, "goal add", &g.id, &format!("Added goal '{}'", g.title))
        })?;
        Ok(g)
    }

    fn update_goal(&self, id: &str, patch: &GoalPatch) -> AppResult<Goal> {
        self.with_conn(|conn| {
            let g = queries::update_goal(conn, &self.user_id, id, patch)?;
            ttlog(
                conn,
                "goal progress",
                id,
                &format!("Goal '{}' at {}/{} {}", g.title, g.current, g.target, g.unit),
            )?;
            Ok(g)
        })
    }

    fn delete_goal(&self, id: &str) -> AppResult<()> {
        self.with_conn(|conn| {
            if !queries::delete_goal(conn, &self.user_id, id)? {
                return Err(AppError::not_found("goal", id));
            }
            ttlog(conn, "goal del", id, "Deleted goal")
        })
    }
}

impl Repository for SqliteRepository {
    fn backend_name(&self) -> &'static str {
        "sqlite"
    }
}
