// Analytics derivation
// Feature: Analytics (002-analytics)
//
// Read-only aggregation over the habit collection; never mutates a Habit.

use chrono::{Datelike, NaiveDate};

use crate::models::analytics::{AnalyticsOverview, DateRange, HabitStats};
use crate::models::habit::Habit;

use super::error::{HabitError, HabitResult};
use super::streak::{
    best_streak, completions_in_range, compute_streak, expected_periods, StreakPolicy,
};

/// Derive per-habit and overall analytics for the given range
///
/// Completion rate is completions in range over the periods the habit's
/// cadence expects in range. Goal progress is current streak over the
/// goal, clamped to 1.0.
pub fn derive_analytics(
    habits: &[Habit],
    range: &DateRange,
    as_of: NaiveDate,
    policy: StreakPolicy,
) -> HabitResult<AnalyticsOverview> {
    if range.start > range.end {
        return Err(HabitError::InvalidRange);
    }

    let mut stats = Vec::with_capacity(habits.len());
    let mut weekday_completions = [0u32; 7];

    for habit in habits {
        let current_streak = compute_streak(&habit.completed_dates, habit.frequency, as_of, policy);
        let completions = completions_in_range(&habit.completed_dates, habit.frequency, range);
        let expected = expected_periods(habit.frequency, range);
        let completion_rate = if expected == 0 {
            0.0
        } else {
            completions as f64 / expected as f64
        };
        let goal_progress = habit
            .streak_goal
            .map(|goal| (current_streak as f64 / goal as f64).min(1.0));

        for date in habit.completed_dates.range(range.start..=range.end) {
            weekday_completions[date.weekday().num_days_from_sunday() as usize] += 1;
        }

        stats.push(HabitStats {
            habit_id: habit.id.clone(),
            title: habit.title.clone(),
            frequency: habit.frequency,
            current_streak,
            best_streak: best_streak(&habit.completed_dates, habit.frequency),
            total_completions: habit.total_completions(),
            completion_rate,
            goal_progress,
        });
    }

    Ok(AnalyticsOverview {
        total_habits: habits.len(),
        total_completions: stats.iter().map(|s| s.total_completions).sum(),
        longest_current_streak: stats.iter().map(|s| s.current_streak).max().unwrap_or(0),
        longest_best_streak: stats.iter().map(|s| s.best_streak).max().unwrap_or(0),
        weekday_completions,
        habits: stats,
    })
}
