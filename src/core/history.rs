//! Workout history: search filter and relative-date sections.

use crate::models::Workout;
use crate::utils::date::{WeekStart, is_same_month, month_year_label, week_bounds};
use chrono::{Datelike, NaiveDate};
use clap::ValueEnum;
use serde::Serialize;
use std::cmp::Reverse;

/// How sections are ordered in the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum SectionOrder {
    /// In the order each title is first met while scanning the input.
    #[default]
    FirstSeen,
    /// Today, Yesterday, This Week, This Month, then months newest first.
    Recency,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionLabel {
    Today,
    Yesterday,
    ThisWeek,
    ThisMonth,
    Month { year: i32, month: u32 },
}

impl SectionLabel {
    /// Classify `day` relative to `today`. Earlier labels win:
    /// Today > Yesterday > This Week > This Month > month and year.
    pub fn classify(day: NaiveDate, today: NaiveDate, week_start: WeekStart) -> Self {
        if day == today {
            return SectionLabel::Today;
        }
        if today.pred_opt() == Some(day) {
            return SectionLabel::Yesterday;
        }
        let (first, last) = week_bounds(today, week_start);
        if day >= first && day <= last {
            return SectionLabel::ThisWeek;
        }
        if is_same_month(day, today) {
            return SectionLabel::ThisMonth;
        }
        SectionLabel::Month {
            year: day.year(),
            month: day.month(),
        }
    }

    pub fn title(&self) -> String {
        match self {
            SectionLabel::Today => "Today".to_string(),
            SectionLabel::Yesterday => "Yesterday".to_string(),
            SectionLabel::ThisWeek => "This Week".to_string(),
            SectionLabel::ThisMonth => "This Month".to_string(),
            SectionLabel::Month { year, month } => NaiveDate::from_ymd_opt(*year, *month, 1)
                .map(month_year_label)
                .unwrap_or_else(|| format!("{month:02}/{year}")),
        }
    }

    fn recency_key(&self) -> (u8, Reverse<(i32, u32)>) {
        match self {
            SectionLabel::Today => (0, Reverse((0, 0))),
            SectionLabel::Yesterday => (1, Reverse((0, 0))),
            SectionLabel::ThisWeek => (2, Reverse((0, 0))),
            SectionLabel::ThisMonth => (3, Reverse((0, 0))),
            SectionLabel::Month { year, month } => (4, Reverse((*year, *month))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistorySection {
    pub title: String,
    pub workouts: Vec<Workout>,
}

/// Workouts whose title or type contains `query`, ignoring case.
/// A blank query keeps everything.
pub fn filter_workouts<'a>(workouts: &'a [Workout], query: &str) -> Vec<&'a Workout> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return workouts.iter().collect();
    }
    workouts.iter().filter(|w| w.matches(&needle)).collect()
}

/// Partition the filtered workouts into sections. Each workout appears in
/// exactly one section and keeps its relative input order.
pub fn group_history(
    workouts: &[Workout],
    query: &str,
    today: NaiveDate,
    week_start: WeekStart,
    order: SectionOrder,
) -> Vec<HistorySection> {
    let mut groups: Vec<(SectionLabel, Vec<Workout>)> = Vec::new();

    for w in filter_workouts(workouts, query) {
        let label = SectionLabel::classify(w.local_date(), today, week_start);
        match groups.iter_mut().find(|(l, _)| *l == label) {
            Some((_, items)) => items.push(w.clone()),
            None => groups.push((label, vec![w.clone()])),
        }
    }

    if order == SectionOrder::Recency {
        groups.sort_by_key(|(label, _)| label.recency_key());
    }

    groups
        .into_iter()
        .map(|(label, workouts)| HistorySection {
            title: label.title(),
            workouts,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testing::{workout, workout_on};
    use crate::models::WorkoutType;
    use std::collections::HashSet;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    // Thursday
    fn today() -> NaiveDate {
        d(2024, 3, 21)
    }

    fn titles(sections: &[HistorySection]) -> Vec<&str> {
        sections.iter().map(|s| s.title.as_str()).collect()
    }

    #[test]
    fn today_and_yesterday_scenario() {
        let ws = vec![
            workout_on("1", today(), 45, 420),
            workout_on("2", d(2024, 3, 20), 60, 350),
        ];
        let sections = group_history(&ws, "", today(), WeekStart::Monday, SectionOrder::FirstSeen);
        assert_eq!(titles(&sections), ["Today", "Yesterday"]);
        assert_eq!(sections[0].workouts.len(), 1);
        assert_eq!(sections[1].workouts.len(), 1);
        assert_eq!(sections[0].workouts[0].id, "1");
    }

    #[test]
    fn label_precedence() {
        let t = today();
        let w = WeekStart::Monday;
        assert_eq!(SectionLabel::classify(t, t, w), SectionLabel::Today);
        assert_eq!(SectionLabel::classify(d(2024, 3, 20), t, w), SectionLabel::Yesterday);
        assert_eq!(SectionLabel::classify(d(2024, 3, 18), t, w), SectionLabel::ThisWeek);
        // later this week is still this week
        assert_eq!(SectionLabel::classify(d(2024, 3, 24), t, w), SectionLabel::ThisWeek);
        assert_eq!(SectionLabel::classify(d(2024, 3, 17), t, w), SectionLabel::ThisMonth);
        assert_eq!(SectionLabel::classify(d(2024, 3, 1), t, w), SectionLabel::ThisMonth);
        assert_eq!(
            SectionLabel::classify(d(2024, 2, 29), t, w),
            SectionLabel::Month {
                year: 2024,
                month: 2
            }
        );
    }

    #[test]
    fn yesterday_beats_this_week_across_a_month_edge() {
        // Monday 1 April: yesterday is Sunday 31 March, outside the week and month
        let t = d(2024, 4, 1);
        assert_eq!(
            SectionLabel::classify(d(2024, 3, 31), t, WeekStart::Monday),
            SectionLabel::Yesterday
        );
        assert_eq!(
            SectionLabel::classify(d(2024, 3, 30), t, WeekStart::Monday).title(),
            "March 2024"
        );
    }

    #[test]
    fn sunday_week_start_changes_this_week() {
        let t = d(2024, 3, 21);
        assert_eq!(
            SectionLabel::classify(d(2024, 3, 17), t, WeekStart::Sunday),
            SectionLabel::ThisWeek
        );
        assert_eq!(
            SectionLabel::classify(d(2024, 3, 17), t, WeekStart::Monday),
            SectionLabel::ThisMonth
        );
    }

    #[test]
    fn month_title() {
        let label = SectionLabel::classify(d(2024, 1, 5), today(), WeekStart::Monday);
        assert_eq!(label.title(), "January 2024");
    }

    #[test]
    fn search_matches_title_or_type_ignoring_case() {
        let ws = vec![
            workout("1", "Morning Run", WorkoutType::Running, today()),
            workout("2", "Pool Session", WorkoutType::Swimming, today()),
            workout("3", "Leg Day", WorkoutType::Gym, today()),
        ];
        let ids = |q: &str| -> Vec<String> {
            filter_workouts(&ws, q).iter().map(|w| w.id.clone()).collect()
        };
        assert_eq!(ids("RUN"), ["1"]);
        assert_eq!(ids("swim"), ["2"]);
        assert_eq!(ids("  "), ["1", "2", "3"]);
        assert!(ids("tennis").is_empty());
    }

    #[test]
    fn grouping_is_a_partition() {
        let days = [
            today(),
            d(2024, 3, 20),
            d(2024, 3, 19),
            d(2024, 3, 5),
            d(2024, 1, 12),
            d(2023, 12, 31),
            today(),
            d(2024, 1, 2),
        ];
        let ws: Vec<Workout> = days
            .iter()
            .enumerate()
            .map(|(i, day)| workout_on(&i.to_string(), *day, 30, 100))
            .collect();

        let sections = group_history(&ws, "", today(), WeekStart::Monday, SectionOrder::FirstSeen);
        let seen: Vec<String> = sections
            .iter()
            .flat_map(|s| s.workouts.iter().map(|w| w.id.clone()))
            .collect();
        assert_eq!(seen.len(), ws.len());
        let unique: HashSet<&String> = seen.iter().collect();
        assert_eq!(unique.len(), ws.len());

        let today_ids: Vec<&str> = sections[0].workouts.iter().map(|w| w.id.as_str()).collect();
        assert_eq!(sections[0].title, "Today");
        assert_eq!(today_ids, ["0", "6"]);
        assert_eq!(
            titles(&sections),
            [
                "Today",
                "Yesterday",
                "This Week",
                "This Month",
                "January 2024",
                "December 2023"
            ]
        );
    }

    #[test]
    fn first_seen_order_follows_the_scan() {
        let ws = vec![
            workout_on("old", d(2023, 6, 1), 30, 100),
            workout_on("now", today(), 30, 100),
        ];
        let first_seen =
            group_history(&ws, "", today(), WeekStart::Monday, SectionOrder::FirstSeen);
        assert_eq!(titles(&first_seen), ["June 2023", "Today"]);

        let recency = group_history(&ws, "", today(), WeekStart::Monday, SectionOrder::Recency);
        assert_eq!(titles(&recency), ["Today", "June 2023"]);
    }

    #[test]
    fn recency_orders_months_newest_first() {
        let ws = vec![
            workout_on("a", d(2023, 6, 1), 30, 100),
            workout_on("b", d(2024, 1, 1), 30, 100),
            workout_on("c", d(2024, 3, 2), 30, 100),
            workout_on("d", d(2023, 11, 1), 30, 100),
        ];
        let sections = group_history(&ws, "", today(), WeekStart::Monday, SectionOrder::Recency);
        assert_eq!(
            titles(&sections),
            ["This Month", "January 2024", "November 2023", "June 2023"]
        );
    }
}
