// Analytics data models
// Feature: Analytics (002-analytics)

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::habit::HabitFrequency;

/// Weekday labels for the completions chart, Sunday first
pub const WEEK_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// Inclusive calendar date range
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

/// Per-habit analytics snapshot
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HabitStats {
    pub habit_id: String,
    pub title: String,
    pub frequency: HabitFrequency,
    /// Streak as of the evaluation date
    pub current_streak: u32,
    /// Longest run of consecutive qualifying periods anywhere in the history
    pub best_streak: u32,
    pub total_completions: usize,
    /// Completions in range over expected periods in range, 0.0..=1.0
    pub completion_rate: f64,
    /// Progress toward the streak goal, clamped to 0.0..=1.0
    #[serde(skip_serializing_if = "Option::is_none")]
    pub goal_progress: Option<f64>,
}

/// Read-only aggregate over the whole habit collection
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsOverview {
    pub habits: Vec<HabitStats>,
    pub total_habits: usize,
    pub total_completions: usize,
    pub longest_current_streak: u32,
    pub longest_best_streak: u32,
    /// Completions in range per weekday, Sunday first (see WEEK_DAYS)
    pub weekday_completions: [u32; 7],
}
