// Habit data models
// Feature: Habit Tracking (001-habit-tracking)

use std::collections::BTreeSet;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Expected completion cadence for a habit
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum HabitFrequency {
    #[default]
    Daily,
    Weekly,
}

impl std::fmt::Display for HabitFrequency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HabitFrequency::Daily => write!(f, "DAILY"),
            HabitFrequency::Weekly => write!(f, "WEEKLY"),
        }
    }
}

impl std::str::FromStr for HabitFrequency {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "DAILY" => Ok(HabitFrequency::Daily),
            "WEEKLY" => Ok(HabitFrequency::Weekly),
            _ => Err(format!("Unknown habit frequency: {}", s)),
        }
    }
}

/// A tracked recurring behavior
///
/// `streak` is a cached projection of `completed_dates` and `frequency`;
/// the tracker recomputes it after every mutation, it is never set directly.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Habit {
    /// Unique identifier (UUID v4), immutable once assigned
    pub id: String,
    /// Display name, never empty
    pub title: String,
    /// Optional free-text description
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Completion cadence (daily or weekly)
    pub frequency: HabitFrequency,
    /// Consecutive qualifying periods ending at the most recent completion
    pub streak: u32,
    /// Calendar dates on which the habit was marked complete
    #[serde(default)]
    pub completed_dates: BTreeSet<NaiveDate>,
    /// When this habit was created, immutable
    pub created_at: DateTime<Utc>,
    /// Optional target streak length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub streak_goal: Option<u32>,
}

impl Habit {
    /// Create a new habit with a fresh id, zero streak and no completions
    pub fn new(
        title: String,
        frequency: HabitFrequency,
        description: Option<String>,
        streak_goal: Option<u32>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title,
            description,
            frequency,
            streak: 0,
            completed_dates: BTreeSet::new(),
            created_at: Utc::now(),
            streak_goal,
        }
    }

    /// Whether the habit was marked complete on the given date
    pub fn is_completed_on(&self, date: NaiveDate) -> bool {
        self.completed_dates.contains(&date)
    }

    /// Total number of recorded completions
    pub fn total_completions(&self) -> usize {
        self.completed_dates.len()
    }
}

/// Request to create a new habit
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddHabitRequest {
    pub title: String,
    #[serde(default)]
    pub frequency: HabitFrequency,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub streak_goal: Option<u32>,
}

impl AddHabitRequest {
    pub fn new(title: impl Into<String>, frequency: HabitFrequency) -> Self {
        Self {
            title: title.into(),
            frequency,
            description: None,
            streak_goal: None,
        }
    }
}

/// Request to edit an existing habit
/// `None` fields are left unchanged; id, creation time and completion
/// history cannot be edited.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateHabitRequest {
    pub id: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub streak_goal: Option<u32>,
}
