// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Workout completion workflow.
//!
//! Handles the core flow for each completed workout:
//! 1. Update the streak
//! 2. Evaluate achievements against the updated streak
//! 3. Append the workout to history
//! 4. Persist history, streak, and unlocks

use chrono::{DateTime, TimeZone};
use uuid::Uuid;

use crate::db::{keys, Store, StoreError};
use crate::models::{Achievement, Activity, ActivityStats, StreakState, UnlockedAchievement};
use crate::services::{AchievementService, StreakService, WorkoutLog};

/// Owns all per-user tracker state and its persistence.
pub struct Tracker {
    store: Store,
    streak: StreakService,
    achievements: AchievementService,
    workouts: WorkoutLog,
}

/// Result of completing a workout.
#[derive(Debug)]
pub struct WorkoutOutcome {
    pub streak: StreakState,
    pub unlocked: Vec<&'static Achievement>,
}

impl Tracker {
    /// Load persisted state and bring the streak up to date.
    ///
    /// Aggregate counters are rebuilt from the workout history.
    pub fn load<Tz: TimeZone>(store: Store, now: &DateTime<Tz>) -> Result<Self, StoreError> {
        let streak_state: StreakState = store.get(keys::STREAK)?.unwrap_or_default();
        let unlocked: Vec<UnlockedAchievement> =
            store.get(keys::UNLOCKED_ACHIEVEMENTS)?.unwrap_or_default();
        let history: Vec<Activity> = store.get(keys::WORKOUTS)?.unwrap_or_default();

        let stats = ActivityStats::from_history(&history, &now.timezone());
        tracing::info!(
            workouts = history.len(),
            unlocked = unlocked.len(),
            current_streak = streak_state.current_streak,
            "Tracker state loaded"
        );

        let mut tracker = Self {
            store,
            streak: StreakService::new(streak_state),
            achievements: AchievementService::new(stats, unlocked),
            workouts: WorkoutLog::new(history),
        };
        tracker.resume(now)?;
        Ok(tracker)
    }

    pub fn streak(&self) -> &StreakService {
        &self.streak
    }

    pub fn achievements(&self) -> &AchievementService {
        &self.achievements
    }

    pub fn workouts(&self) -> &WorkoutLog {
        &self.workouts
    }

    /// Process a completed workout. Call exactly once per workout.
    ///
    /// Changes are staged on copies and only take effect once every
    /// document is written, so a failed save leaves the tracker as it was
    /// and the workout can be retried.
    pub fn complete_workout<Tz: TimeZone>(
        &mut self,
        activity: Activity,
        now: &DateTime<Tz>,
    ) -> Result<WorkoutOutcome, StoreError> {
        tracing::info!(
            activity_id = %activity.id,
            activity_type = ?activity.activity_type,
            "Completing workout"
        );

        let mut streak = self.streak.clone();
        let mut achievements = self.achievements.clone();
        let mut workouts = self.workouts.clone();

        streak.record_activity(now);
        let unlocked = achievements.check_achievements(&activity, streak.state(), now);
        workouts.save(activity);

        self.store.set(keys::WORKOUTS, workouts.all())?;
        self.store.set(keys::STREAK, streak.state())?;
        if !unlocked.is_empty() {
            self.store
                .set(keys::UNLOCKED_ACHIEVEMENTS, achievements.unlocked())?;
        }

        self.streak = streak;
        self.achievements = achievements;
        self.workouts = workouts;

        Ok(WorkoutOutcome {
            streak: self.streak.state().clone(),
            unlocked,
        })
    }

    /// Remove a workout from history. Streak, aggregates, and unlocks are
    /// not rolled back. Returns `false` if the id is unknown.
    pub fn delete_workout(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let mut workouts = self.workouts.clone();
        if !workouts.delete(id) {
            return Ok(false);
        }
        self.store.set(keys::WORKOUTS, workouts.all())?;
        self.workouts = workouts;
        tracing::info!(activity_id = %id, "Workout deleted");
        Ok(true)
    }

    /// Lapse a stale streak. Call whenever the app comes back into use.
    pub fn resume<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> Result<(), StoreError> {
        let mut streak = self.streak.clone();
        streak.check_status(now);
        self.commit_streak(streak)
    }

    pub fn record_weekly_goal_met(&mut self) -> Result<(), StoreError> {
        let mut streak = self.streak.clone();
        streak.record_weekly_goal_met();
        self.commit_streak(streak)
    }

    fn commit_streak(&mut self, streak: StreakService) -> Result<(), StoreError> {
        self.store.set(keys::STREAK, streak.state())?;
        self.streak = streak;
        Ok(())
    }
}
