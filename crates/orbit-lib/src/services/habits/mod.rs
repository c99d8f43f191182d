// Habit tracker core
// Feature: Habit Tracking (001-habit-tracking)
//
// Single logical owner of the habit collection. All operations are
// synchronous and CPU-only; callers that share a tracker across threads
// must serialize access themselves.

pub mod analytics;
pub mod error;
pub mod streak;

pub use analytics::derive_analytics;
pub use error::{HabitError, HabitErrorCode, HabitResult};
pub use streak::{best_streak, compute_streak, StreakPolicy};

use chrono::NaiveDate;

use crate::models::analytics::{AnalyticsOverview, DateRange};
use crate::models::habit::{AddHabitRequest, Habit, UpdateHabitRequest};
use crate::models::settings::{AccountSettings, MAX_FREE_HABITS};

/// Owns the habit collection and enforces the free-tier cap
pub struct HabitTracker {
    habits: Vec<Habit>,
    settings: AccountSettings,
    policy: StreakPolicy,
}

impl HabitTracker {
    pub fn new(settings: AccountSettings) -> Self {
        Self::with_policy(settings, StreakPolicy::default())
    }

    pub fn with_policy(settings: AccountSettings, policy: StreakPolicy) -> Self {
        Self {
            habits: Vec::new(),
            settings,
            policy,
        }
    }

    /// Create a new habit
    ///
    /// Rejects an empty title and a zero streak goal. Free accounts are
    /// capped at MAX_FREE_HABITS; the cap is a hard rejection, never a
    /// silent truncation.
    pub fn create(&mut self, request: AddHabitRequest) -> HabitResult<Habit> {
        let title = request.title.trim();
        if title.is_empty() {
            return Err(HabitError::EmptyTitle);
        }
        if request.streak_goal == Some(0) {
            return Err(HabitError::InvalidStreakGoal);
        }
        if !self.settings.is_premium && self.habits.len() >= MAX_FREE_HABITS {
            log::info!(
                "[habits] Free plan cap reached ({} habits), rejecting create",
                self.habits.len()
            );
            return Err(HabitError::limit_reached());
        }

        let habit = Habit::new(
            title.to_string(),
            request.frequency,
            request.description,
            request.streak_goal,
        );
        log::debug!("[habits] Created habit {} ({})", habit.id, habit.frequency);
        self.habits.push(habit.clone());
        Ok(habit)
    }

    /// Toggle completion of a habit for a calendar date
    ///
    /// Idempotent per date: a present date is removed, an absent one is
    /// added, so toggling twice restores the prior state. The cached
    /// streak is recomputed from scratch afterwards.
    pub fn toggle_completion(
        &mut self,
        id: &str,
        date: NaiveDate,
        today: NaiveDate,
    ) -> HabitResult<Habit> {
        if date > today {
            return Err(HabitError::FutureDate(date));
        }
        let policy = self.policy;
        let habit = self.get_mut(id)?;

        if !habit.completed_dates.remove(&date) {
            habit.completed_dates.insert(date);
        }
        habit.streak = compute_streak(&habit.completed_dates, habit.frequency, today, policy);
        log::debug!(
            "[habits] Toggled {} on {}, streak now {}",
            habit.id,
            date,
            habit.streak
        );
        Ok(habit.clone())
    }

    /// Edit a habit's title, description or streak goal
    pub fn update(&mut self, request: UpdateHabitRequest) -> HabitResult<Habit> {
        if let Some(ref title) = request.title {
            if title.trim().is_empty() {
                return Err(HabitError::EmptyTitle);
            }
        }
        if request.streak_goal == Some(0) {
            return Err(HabitError::InvalidStreakGoal);
        }

        let habit = self.get_mut(&request.id)?;
        if let Some(title) = request.title {
            habit.title = title.trim().to_string();
        }
        if let Some(description) = request.description {
            habit.description = Some(description);
        }
        if let Some(goal) = request.streak_goal {
            habit.streak_goal = Some(goal);
        }
        Ok(habit.clone())
    }

    /// Delete a habit
    pub fn delete(&mut self, id: &str) -> HabitResult<()> {
        let before = self.habits.len();
        self.habits.retain(|h| h.id != id);
        if self.habits.len() == before {
            return Err(HabitError::NotFound(id.to_string()));
        }
        log::debug!("[habits] Deleted habit {}", id);
        Ok(())
    }

    /// Re-project every cached streak for a new evaluation date
    /// Keeps the cache honest across day boundaries without a toggle.
    pub fn refresh_streaks(&mut self, today: NaiveDate) {
        let policy = self.policy;
        for habit in &mut self.habits {
            habit.streak = compute_streak(&habit.completed_dates, habit.frequency, today, policy);
        }
    }

    /// Read-only analytics over the current collection
    pub fn analytics(&self, range: &DateRange, as_of: NaiveDate) -> HabitResult<AnalyticsOverview> {
        derive_analytics(&self.habits, range, as_of, self.policy)
    }

    pub fn get(&self, id: &str) -> Option<&Habit> {
        self.habits.iter().find(|h| h.id == id)
    }

    pub fn habits(&self) -> &[Habit] {
        &self.habits
    }

    pub fn len(&self) -> usize {
        self.habits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.habits.is_empty()
    }

    pub fn is_premium(&self) -> bool {
        self.settings.is_premium
    }

    pub fn set_premium(&mut self, is_premium: bool) {
        self.settings.is_premium = is_premium;
    }

    pub fn policy(&self) -> StreakPolicy {
        self.policy
    }

    fn get_mut(&mut self, id: &str) -> HabitResult<&mut Habit> {
        self.habits
            .iter_mut()
            .find(|h| h.id == id)
            .ok_or_else(|| HabitError::NotFound(id.to_string()))
    }
}

impl Default for HabitTracker {
    fn default() -> Self {
        Self::new(AccountSettings::default())
    }
}
