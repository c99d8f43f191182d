// Habit tracker error types
// Feature: Habit Tracking (001-habit-tracking)

use chrono::NaiveDate;
use thiserror::Error;

use crate::models::settings::MAX_FREE_HABITS;

/// Habit tracker error
#[derive(Error, Debug, PartialEq, Eq)]
pub enum HabitError {
    /// Title is empty or whitespace-only
    #[error("Habit title cannot be empty")]
    EmptyTitle,

    /// Streak goal must be at least 1 when set
    #[error("Streak goal must be a positive number")]
    InvalidStreakGoal,

    /// Completion date lies after the evaluation date
    #[error("Cannot complete a habit on a future date: {0}")]
    FutureDate(NaiveDate),

    /// Analytics range starts after it ends
    #[error("Date range start must not be after its end")]
    InvalidRange,

    /// Free plan habit cap reached
    #[error("Free plan is limited to {0} habits, upgrade to Pro for unlimited habits")]
    LimitReached(usize),

    /// No habit with the given id
    #[error("Habit not found: {0}")]
    NotFound(String),
}

impl HabitError {
    pub fn limit_reached() -> Self {
        HabitError::LimitReached(MAX_FREE_HABITS)
    }
}

/// Result type for habit operations
pub type HabitResult<T> = Result<T, HabitError>;

/// Habit error codes for the frontend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HabitErrorCode {
    InvalidInput,
    LimitExceeded,
    NotFound,
}

impl HabitErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitErrorCode::InvalidInput => "HABIT_INVALID_INPUT",
            HabitErrorCode::LimitExceeded => "HABIT_LIMIT_EXCEEDED",
            HabitErrorCode::NotFound => "HABIT_NOT_FOUND",
        }
    }
}

impl HabitError {
    pub fn code(&self) -> HabitErrorCode {
        match self {
            HabitError::EmptyTitle
            | HabitError::InvalidStreakGoal
            | HabitError::FutureDate(_)
            | HabitError::InvalidRange => HabitErrorCode::InvalidInput,
            HabitError::LimitReached(_) => HabitErrorCode::LimitExceeded,
            HabitError::NotFound(_) => HabitErrorCode::NotFound,
        }
    }
}

impl From<HabitError> for String {
    fn from(err: HabitError) -> Self {
        err.to_string()
    }
}
