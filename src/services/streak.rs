// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Streak tracking service.

use chrono::{DateTime, TimeZone};

use crate::models::{StreakState, StreakStatus};

/// Owns the user's streak. Persistence is left to the caller.
#[derive(Debug, Clone, Default)]
pub struct StreakService {
    state: StreakState,
}

impl StreakService {
    pub fn new(state: StreakState) -> Self {
        Self { state }
    }

    pub fn state(&self) -> &StreakState {
        &self.state
    }

    /// Record that an activity was completed at `now`.
    pub fn record_activity<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let previous = self.state.current_streak;
        if self.state.record_activity(now) {
            tracing::info!(
                previous,
                current = self.state.current_streak,
                longest = self.state.longest_streak,
                "Streak updated"
            );
        } else {
            tracing::debug!(
                current = self.state.current_streak,
                "Activity already counted for this day"
            );
        }
    }

    /// Lapse the streak if the grace day has passed. Call on resume.
    pub fn check_status<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        let previous = self.state.current_streak;
        self.state.check_status(now);
        if previous != self.state.current_streak {
            tracing::info!(previous, "Streak lapsed");
        }
    }

    pub fn record_weekly_goal_met(&mut self) {
        self.state.weekly_goals_met += 1;
    }

    pub fn current_streak(&self) -> u32 {
        self.state.current_streak
    }

    pub fn longest_streak(&self) -> u32 {
        self.state.longest_streak
    }

    pub fn status<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StreakStatus {
        self.state.status(now)
    }

    pub fn message<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> String {
        self.status(now).message(self.state.current_streak)
    }
}
