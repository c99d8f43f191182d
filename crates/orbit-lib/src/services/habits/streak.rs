// Streak computation
// Pure functions over a habit's completion-date set; the tracker caches
// their results on the Habit record and recomputes after every mutation.

use std::collections::BTreeSet;

use chrono::{Datelike, Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::models::analytics::DateRange;
use crate::models::habit::HabitFrequency;

/// How an uncompleted current period affects the streak
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum StreakPolicy {
    /// The streak survives until the current period's window closes;
    /// the walk starts at the previous period instead.
    #[default]
    GraceCurrentPeriod,
    /// An uncompleted current period reads as a broken streak.
    StrictCurrentPeriod,
}

/// First day (Monday) of the ISO week containing `date`
pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_monday() as i64)
}

/// Distinct ISO weeks with at least one completion, keyed by week start
fn completed_weeks(dates: &BTreeSet<NaiveDate>) -> BTreeSet<NaiveDate> {
    dates.iter().map(|d| week_start(*d)).collect()
}

/// Count of consecutive qualifying periods ending at the most recent
/// completion, evaluated at `as_of`. Returns 0 when the chain is broken.
pub fn compute_streak(
    dates: &BTreeSet<NaiveDate>,
    frequency: HabitFrequency,
    as_of: NaiveDate,
    policy: StreakPolicy,
) -> u32 {
    let (periods, step) = match frequency {
        HabitFrequency::Daily => (dates.clone(), Duration::days(1)),
        HabitFrequency::Weekly => (completed_weeks(dates), Duration::weeks(1)),
    };
    let mut cursor = match frequency {
        HabitFrequency::Daily => as_of,
        HabitFrequency::Weekly => week_start(as_of),
    };

    if !periods.contains(&cursor) {
        match policy {
            StreakPolicy::GraceCurrentPeriod => cursor = cursor - step,
            StreakPolicy::StrictCurrentPeriod => return 0,
        }
    }

    let mut streak = 0;
    while periods.contains(&cursor) {
        streak += 1;
        cursor = cursor - step;
    }
    streak
}

/// Longest run of consecutive qualifying periods anywhere in the history
pub fn best_streak(dates: &BTreeSet<NaiveDate>, frequency: HabitFrequency) -> u32 {
    let (periods, step) = match frequency {
        HabitFrequency::Daily => (dates.clone(), Duration::days(1)),
        HabitFrequency::Weekly => (completed_weeks(dates), Duration::weeks(1)),
    };

    let mut best = 0u32;
    let mut run = 0u32;
    let mut prev: Option<NaiveDate> = None;
    for period in periods {
        run = match prev {
            Some(p) if period - p == step => run + 1,
            _ => 1,
        };
        best = best.max(run);
        prev = Some(period);
    }
    best
}

/// Completions inside the range: days for daily habits, distinct
/// qualifying weeks for weekly habits
pub fn completions_in_range(
    dates: &BTreeSet<NaiveDate>,
    frequency: HabitFrequency,
    range: &DateRange,
) -> usize {
    let in_range = dates.range(range.start..=range.end);
    match frequency {
        HabitFrequency::Daily => in_range.count(),
        HabitFrequency::Weekly => in_range.map(|d| week_start(*d)).collect::<BTreeSet<_>>().len(),
    }
}

/// Number of periods the cadence expects inside the range
pub fn expected_periods(frequency: HabitFrequency, range: &DateRange) -> u32 {
    match frequency {
        HabitFrequency::Daily => ((range.end - range.start).num_days() + 1) as u32,
        HabitFrequency::Weekly => {
            let weeks = (week_start(range.end) - week_start(range.start)).num_days() / 7;
            (weeks + 1) as u32
        }
    }
}
