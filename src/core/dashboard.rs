//! Dashboard aggregation: weekly duration/calories series plus goal and
//! recent-workout summaries.

use crate::core::context::AppContext;
use crate::core::goals::{GoalProgress, goal_progress};
use crate::models::{Goal, Workout};
use crate::utils::date::{WeekStart, week_bounds};
use chrono::{Datelike, NaiveDate};
use serde::Serialize;

/// Chart labels, index 0 = Monday.
pub const WEEKDAY_LABELS: [&str; 7] = ["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"];

/// Monday → 0 … Sunday → 6.
pub fn weekday_index(d: NaiveDate) -> usize {
    d.weekday().num_days_from_monday() as usize
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DayPoint {
    pub label: &'static str,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklySeries {
    pub first_day: NaiveDate,
    pub last_day: NaiveDate,
    /// Minutes per weekday.
    pub duration: [u64; 7],
    pub calories: [u64; 7],
    pub sessions: [u32; 7],
}

impl WeeklySeries {
    fn empty(first_day: NaiveDate, last_day: NaiveDate) -> Self {
        Self {
            first_day,
            last_day,
            duration: [0; 7],
            calories: [0; 7],
            sessions: [0; 7],
        }
    }

    fn points(values: &[u64; 7]) -> Vec<DayPoint> {
        WEEKDAY_LABELS
            .iter()
            .zip(values.iter())
            .map(|(label, value)| DayPoint {
                label: *label,
                value: *value,
            })
            .collect()
    }

    pub fn duration_points(&self) -> Vec<DayPoint> {
        Self::points(&self.duration)
    }

    pub fn calories_points(&self) -> Vec<DayPoint> {
        Self::points(&self.calories)
    }

    pub fn total_duration(&self) -> u64 {
        self.duration.iter().sum()
    }

    pub fn total_calories(&self) -> u64 {
        self.calories.iter().sum()
    }

    pub fn total_sessions(&self) -> u32 {
        self.sessions.iter().sum()
    }
}

/// Sum duration and calories per weekday for the workouts whose calendar
/// date falls inside the week containing `today` (bounds inclusive).
pub fn weekly_series(workouts: &[Workout], today: NaiveDate, week_start: WeekStart) -> WeeklySeries {
    let (first, last) = week_bounds(today, week_start);
    let mut series = WeeklySeries::empty(first, last);

    for w in workouts {
        let day = w.local_date();
        if day < first || day > last {
            continue;
        }
        let idx = weekday_index(day);
        series.duration[idx] += u64::from(w.duration);
        series.calories[idx] += u64::from(w.calories);
        series.sessions[idx] += 1;
    }

    series
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub today: NaiveDate,
    pub week: WeeklySeries,
    pub goals: Vec<GoalProgress>,
    pub recent: Vec<Workout>,
    /// True when the data is the built-in sample set rather than the store's.
    pub from_sample: bool,
}

impl DashboardView {
    pub fn achieved_goals(&self) -> usize {
        self.goals.iter().filter(|g| g.achieved).count()
    }
}

pub fn build_dashboard(workouts: &[Workout], goals: &[Goal], ctx: &AppContext) -> DashboardView {
    DashboardView {
        today: ctx.today,
        week: weekly_series(workouts, ctx.today, ctx.week_start),
        goals: goal_progress(goals),
        recent: workouts.iter().take(ctx.recent_limit).cloned().collect(),
        from_sample: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{goal, workout_on};

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // Wednesday
    const TODAY: (i32, u32, u32) = (2024, 1, 17);

    fn today() -> NaiveDate {
        d(TODAY.0, TODAY.1, TODAY.2)
    }

    #[test]
    fn empty_input_yields_zero_series() {
        let s = weekly_series(&[], today(), WeekStart::Monday);
        assert_eq!(s.duration, [0; 7]);
        assert_eq!(s.calories, [0; 7]);
        assert_eq!(s.first_day, d(2024, 1, 15));
        assert_eq!(s.last_day, d(2024, 1, 21));
    }

    #[test]
    fn accumulates_per_weekday() {
        let ws = vec![
            workout_on("1", d(2024, 1, 15), 45, 420),
            workout_on("2", d(2024, 1, 15), 30, 200),
            workout_on("3", d(2024, 1, 17), 60, 350),
        ];
        let s = weekly_series(&ws, today(), WeekStart::Monday);
        assert_eq!(s.duration, [75, 0, 60, 0, 0, 0, 0]);
        assert_eq!(s.calories, [620, 0, 350, 0, 0, 0, 0]);
        assert_eq!(s.sessions, [2, 0, 1, 0, 0, 0, 0]);
    }

    #[test]
    fn sunday_lands_in_the_last_slot() {
        let ws = vec![workout_on("1", d(2024, 1, 21), 40, 300)];
        let s = weekly_series(&ws, today(), WeekStart::Monday);
        assert_eq!(s.duration[6], 40);
        assert_eq!(s.calories[6], 300);
        assert_eq!(s.total_duration(), 40);
    }

    #[test]
    fn week_bounds_are_inclusive_and_exclusive_outside() {
        let ws = vec![
            workout_on("mon", d(2024, 1, 15), 10, 1),
            workout_on("sun", d(2024, 1, 21), 20, 2),
            workout_on("prev-sun", d(2024, 1, 14), 100, 100),
            workout_on("next-mon", d(2024, 1, 22), 100, 100),
        ];
        let s = weekly_series(&ws, today(), WeekStart::Monday);
        assert_eq!(s.total_duration(), 30);
        assert_eq!(s.total_calories(), 3);
    }

    #[test]
    fn sunday_start_week_still_indexes_from_monday() {
        // Week is Sun 14 .. Sat 20
        let ws = vec![
            workout_on("sun", d(2024, 1, 14), 40, 300),
            workout_on("sat", d(2024, 1, 20), 25, 100),
            workout_on("next-sun", d(2024, 1, 21), 99, 99),
        ];
        let s = weekly_series(&ws, today(), WeekStart::Sunday);
        assert_eq!(s.duration, [0, 0, 0, 0, 0, 25, 40]);
    }

    #[test]
    fn totals_match_the_in_week_workouts() {
        let ws: Vec<Workout> = (0..20)
            .map(|i| workout_on(&i.to_string(), d(2024, 1, 8 + i), 10 + i, 100 * i))
            .collect();
        let s = weekly_series(&ws, today(), WeekStart::Monday);
        let (first, last) = week_bounds(today(), WeekStart::Monday);
        let in_week: Vec<&Workout> = ws
            .iter()
            .filter(|w| w.local_date() >= first && w.local_date() <= last)
            .collect();
        let minutes: u64 = in_week.iter().map(|w| u64::from(w.duration)).sum();
        let kcal: u64 = in_week.iter().map(|w| u64::from(w.calories)).sum();
        assert_eq!(s.total_duration(), minutes);
        assert_eq!(s.total_calories(), kcal);
        assert_eq!(s.total_sessions(), 7);
    }

    #[test]
    fn dashboard_keeps_recent_in_input_order() {
        let ws = vec![
            workout_on("a", d(2024, 1, 17), 10, 1),
            workout_on("b", d(2024, 1, 16), 10, 1),
            workout_on("c", d(2024, 1, 10), 10, 1),
        ];
        let goals = vec![goal("g1", 12.0, 10.0), goal("g2", 3.0, 5.0)];
        let ctx = AppContext {
            recent_limit: 2,
            ..AppContext::default()
        }
        .with_today(today());
        let view = build_dashboard(&ws, &goals, &ctx);
        let ids: Vec<&str> = view.recent.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(ids, ["a", "b"]);
        assert_eq!(view.goals[0].percent, 100);
        assert_eq!(view.goals[1].percent, 60);
        assert_eq!(view.achieved_goals(), 1);
        assert_eq!(view.week.duration_points()[2].label, "Wed");
        assert_eq!(view.week.duration_points()[2].value, 10);
    }
}
