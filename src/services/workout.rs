// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Completed workout history.

use chrono::{DateTime, Duration, TimeZone, Utc};
use uuid::Uuid;

use crate::models::{Activity, ActivityType, DailyProgress};

/// Totals for the current day.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TodayStats {
    pub calories: f64,
    pub distance: f64,
    pub duration_secs: f64,
    pub workouts: usize,
}

impl TodayStats {
    pub fn to_progress(self) -> DailyProgress {
        DailyProgress {
            calories: self.calories,
            distance: self.distance,
            exercise_minutes: (self.duration_secs / 60.0) as u32,
            workouts: self.workouts as u32,
            ..Default::default()
        }
    }
}

/// Workouts kept newest first.
#[derive(Debug, Clone, Default)]
pub struct WorkoutLog {
    workouts: Vec<Activity>,
}

impl WorkoutLog {
    pub fn new(workouts: Vec<Activity>) -> Self {
        Self { workouts }
    }

    pub fn save(&mut self, activity: Activity) {
        self.workouts.insert(0, activity);
    }

    /// Remove a workout. Returns `false` if no workout had that id.
    pub fn delete(&mut self, id: Uuid) -> bool {
        let before = self.workouts.len();
        self.workouts.retain(|w| w.id != id);
        self.workouts.len() != before
    }

    pub fn all(&self) -> &[Activity] {
        &self.workouts
    }

    pub fn get(&self, id: Uuid) -> Option<&Activity> {
        self.workouts.iter().find(|w| w.id == id)
    }

    pub fn recent(&self, limit: usize) -> &[Activity] {
        &self.workouts[..limit.min(self.workouts.len())]
    }

    /// Workouts whose start falls within `[start, end]`.
    pub fn between(&self, start: DateTime<Utc>, end: DateTime<Utc>) -> Vec<&Activity> {
        self.workouts
            .iter()
            .filter(|w| w.start_date >= start && w.start_date <= end)
            .collect()
    }

    /// Workouts started since local midnight.
    pub fn today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Vec<&Activity> {
        let now_utc = now.with_timezone(&Utc);
        let midnight = now
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .and_then(|naive| now.timezone().from_local_datetime(&naive).earliest())
            .map(|dt| dt.with_timezone(&Utc))
            .unwrap_or(now_utc);
        self.between(midnight, now_utc)
    }

    pub fn last_days<Tz: TimeZone>(&self, days: i64, now: &DateTime<Tz>) -> Vec<&Activity> {
        let now_utc = now.with_timezone(&Utc);
        self.between(now_utc - Duration::days(days), now_utc)
    }

    // ─── Statistics ──────────────────────────────────────────────

    pub fn total_count(&self) -> usize {
        self.workouts.len()
    }

    pub fn total_calories(&self) -> f64 {
        self.workouts.iter().map(|w| w.calories).sum()
    }

    pub fn total_distance(&self) -> f64 {
        self.workouts.iter().filter_map(|w| w.distance).sum()
    }

    pub fn total_duration_secs(&self) -> f64 {
        self.workouts.iter().map(Activity::duration_secs).sum()
    }

    pub fn count_for(&self, activity_type: ActivityType) -> usize {
        self.workouts
            .iter()
            .filter(|w| w.activity_type == activity_type)
            .count()
    }

    pub fn today_stats<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> TodayStats {
        let today = self.today(now);
        TodayStats {
            calories: today.iter().map(|w| w.calories).sum(),
            distance: today.iter().filter_map(|w| w.distance).sum(),
            duration_secs: today.iter().map(|w| w.duration_secs()).sum(),
            workouts: today.len(),
        }
    }
}
