//! Text rendering of the view models. Pure string builders so the
//! commands stay thin and the output can be tested.

use crate::core::dashboard::{DashboardView, DayPoint};
use crate::core::goals::GoalProgress;
use crate::core::history::HistorySection;
use crate::core::profile::ProfileStats;
use crate::models::Workout;
use crate::utils::colors::{
    color_for_goal_type, color_for_progress, color_for_workout_type, paint, GREY,
};
use crate::utils::formatting::{bar, format_amount, progress_bar};
use crate::utils::table::Table;
use crate::utils::{format_distance, format_duration};

const BAR_WIDTH: usize = 24;

pub fn workouts_table(workouts: &[Workout], colors: bool) -> String {
    let mut t = Table::new(["Date", "Title", "Type", "Duration", "Distance", "Calories", "Id"]);
    for w in workouts {
        t.add_row(vec![
            w.local_date().format("%Y-%m-%d").to_string(),
            w.title.clone(),
            paint(&w.kind.label(), color_for_workout_type(&w.kind), colors),
            format_duration(u64::from(w.duration)),
            format_distance(w.distance),
            format!("{} kcal", w.calories),
            paint(&w.id, GREY, colors),
        ]);
    }
    t.render()
}

pub fn history(sections: &[HistorySection], colors: bool) -> String {
    let mut out = String::new();
    for s in sections {
        out.push_str(&format!("== {} ==\n", s.title));
        out.push_str(&workouts_table(&s.workouts, colors));
        out.push('\n');
    }
    out
}

fn chart(title: &str, unit: &str, points: &[DayPoint]) -> String {
    let max = points.iter().map(|p| p.value).max().unwrap_or(0);
    let mut out = format!("{title}\n");
    for p in points {
        out.push_str(&format!(
            "  {} {:>5} {unit} {}\n",
            p.label,
            p.value,
            bar(p.value, max, BAR_WIDTH)
        ));
    }
    out
}

pub fn goal_line(g: &GoalProgress, colors: bool) -> String {
    let pct = format!("{:>3}%", g.percent);
    format!(
        "{} {} {}  {}/{} {}  ({})",
        progress_bar(g.percent, 20),
        paint(&pct, color_for_progress(g.percent), colors),
        paint(&g.goal.title, color_for_goal_type(g.goal.kind), colors),
        format_amount(g.goal.current),
        format_amount(g.goal.target),
        g.goal.unit,
        paint(&g.goal.id, GREY, colors),
    )
}

pub fn goals(list: &[GoalProgress], colors: bool) -> String {
    let mut out = String::new();
    for g in list {
        out.push_str(&goal_line(g, colors));
        out.push('\n');
    }
    out
}

pub fn dashboard(view: &DashboardView, colors: bool) -> String {
    let w = &view.week;
    let mut out = format!(
        "Week {} – {}: {} workouts, {}, {} kcal\n\n",
        w.first_day.format("%Y-%m-%d"),
        w.last_day.format("%Y-%m-%d"),
        w.total_sessions(),
        format_duration(w.total_duration()),
        w.total_calories()
    );
    out.push_str(&chart("Workout minutes", "min", &w.duration_points()));
    out.push('\n');
    out.push_str(&chart("Calories burned", "kcal", &w.calories_points()));

    out.push_str(&format!(
        "\nGoals ({} of {} achieved)\n",
        view.achieved_goals(),
        view.goals.len()
    ));
    if view.goals.is_empty() {
        out.push_str("  No goals yet.\n");
    } else {
        out.push_str(&goals(&view.goals, colors));
    }

    out.push_str("\nRecent workouts\n");
    if view.recent.is_empty() {
        out.push_str("  No workouts yet.\n");
    } else {
        out.push_str(&workouts_table(&view.recent, colors));
    }
    out
}

pub fn profile(stats: &ProfileStats) -> String {
    format!(
        "Workouts     : {}\nGoals        : {}\nAchievements : {}\n",
        stats.workouts, stats.goals, stats.achievements
    )
}
