//! Screen-level loads with the development fallback policy.

use crate::config::BuildMode;
use crate::core::context::AppContext;
use crate::core::dashboard::{DashboardView, build_dashboard};
use crate::core::history::{HistorySection, SectionOrder, group_history};
use crate::core::profile::ProfileStats;
use crate::core::sample::{sample_goals, sample_workouts};
use crate::errors::{AppError, AppResult};
use crate::models::{Goal, Workout};
use crate::repository::{GoalStore, WorkoutStore};
use crate::utils::date::now;
use std::thread;
use tracing::{error, warn};

#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub data: T,
    /// True when `data` is the built-in sample set.
    pub from_sample: bool,
}

/// Log a failed load; in development substitute `sample`, in production
/// hand the error back.
pub fn with_fallback<T>(
    what: &str,
    result: AppResult<T>,
    mode: BuildMode,
    sample: impl FnOnce() -> T,
) -> AppResult<Loaded<T>> {
    match result {
        Ok(data) => Ok(Loaded {
            data,
            from_sample: false,
        }),
        Err(e) => {
            error!(what, error = %e, "load failed");
            match mode {
                BuildMode::Development => {
                    warn!(what, "showing sample data");
                    Ok(Loaded {
                        data: sample(),
                        from_sample: true,
                    })
                }
                BuildMode::Production => Err(e),
            }
        }
    }
}

pub fn load_workouts<R: WorkoutStore + ?Sized>(
    repo: &R,
    ctx: &AppContext,
    user_id: &str,
) -> AppResult<Loaded<Vec<Workout>>> {
    with_fallback("workouts", repo.list_workouts(), ctx.mode, || {
        sample_workouts(ctx.today, user_id, now())
    })
}

pub fn load_history<R: WorkoutStore + ?Sized>(
    repo: &R,
    ctx: &AppContext,
    user_id: &str,
    query: &str,
    order: SectionOrder,
) -> AppResult<Loaded<Vec<HistorySection>>> {
    let loaded = load_workouts(repo, ctx, user_id)?;
    Ok(Loaded {
        data: group_history(&loaded.data, query, ctx.today, ctx.week_start, order),
        from_sample: loaded.from_sample,
    })
}

/// Workouts, then goals. Either failure falls back as a whole.
pub fn load_dashboard<R: WorkoutStore + GoalStore + ?Sized>(
    repo: &R,
    ctx: &AppContext,
    user_id: &str,
) -> AppResult<DashboardView> {
    let result = repo
        .list_workouts()
        .and_then(|w| repo.list_goals().map(|g| (w, g)));

    let loaded = with_fallback("dashboard", result, ctx.mode, || {
        let created = now();
        (
            sample_workouts(ctx.today, user_id, created),
            sample_goals(user_id, created),
        )
    })?;

    let (workouts, goals) = loaded.data;
    let mut view = build_dashboard(&workouts, &goals, ctx);
    view.from_sample = loaded.from_sample;
    Ok(view)
}

/// Both lists at once on scoped threads, joined before computing stats.
pub fn fetch_both<R: WorkoutStore + GoalStore + ?Sized>(
    repo: &R,
) -> AppResult<(Vec<Workout>, Vec<Goal>)> {
    thread::scope(|s| {
        let workouts = s.spawn(|| repo.list_workouts());
        let goals = s.spawn(|| repo.list_goals());

        let workouts = workouts
            .join()
            .map_err(|_| AppError::Other("workout fetch panicked".into()))?;
        let goals = goals
            .join()
            .map_err(|_| AppError::Other("goal fetch panicked".into()))?;
        Ok((workouts?, goals?))
    })
}

pub fn load_profile<R: WorkoutStore + GoalStore + ?Sized>(
    repo: &R,
    ctx: &AppContext,
) -> AppResult<Loaded<ProfileStats>> {
    let result = fetch_both(repo).map(|(w, g)| ProfileStats::compute(w.len(), g.len()));
    with_fallback("profile", result, ctx.mode, ProfileStats::sample)
}
