// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement evaluation.
//!
//! For each completed workout:
//! 1. Fold the activity into the running aggregates
//! 2. Test every still-locked catalog entry against its requirement
//! 3. Record and return whatever just became satisfied
//!
//! An achievement unlocks at most once. No I/O happens here; the caller
//! persists the unlocked list.

use chrono::{DateTime, TimeZone, Utc};
use std::collections::{BTreeMap, HashSet};

use crate::models::{
    Achievement, AchievementCategory, AchievementRequirement, Activity, ActivityStats,
    StreakState, UnlockedAchievement, ACHIEVEMENTS,
};

/// Tracks aggregates and unlocked achievements for one user.
#[derive(Debug, Clone, Default)]
pub struct AchievementService {
    stats: ActivityStats,
    unlocked: Vec<UnlockedAchievement>,
    unlocked_ids: HashSet<String>,
}

impl AchievementService {
    /// Restore from persisted unlocks and rebuilt aggregates.
    ///
    /// Duplicate records for the same id keep the first one.
    pub fn new(stats: ActivityStats, unlocked: Vec<UnlockedAchievement>) -> Self {
        let mut service = Self {
            stats,
            ..Default::default()
        };
        for record in unlocked {
            if service.unlocked_ids.insert(record.achievement_id.clone()) {
                service.unlocked.push(record);
            }
        }
        service
    }

    pub fn stats(&self) -> &ActivityStats {
        &self.stats
    }

    pub fn unlocked(&self) -> &[UnlockedAchievement] {
        &self.unlocked
    }

    /// Evaluate the catalog after `activity` was completed.
    ///
    /// Must be called exactly once per physical activity. Returns newly
    /// unlocked achievements in catalog order.
    pub fn check_achievements<Tz: TimeZone>(
        &mut self,
        activity: &Activity,
        streak: &StreakState,
        now: &DateTime<Tz>,
    ) -> Vec<&'static Achievement> {
        self.stats.update_from_activity(activity, &now.timezone());

        let unlocked_date = now.with_timezone(&Utc);
        let mut newly_unlocked = Vec::new();

        for achievement in ACHIEVEMENTS {
            if self.unlocked_ids.contains(achievement.id) {
                continue;
            }
            if !requirement_met(&achievement.requirement, &self.stats, activity, streak) {
                continue;
            }

            let value = triggering_value(&achievement.requirement, activity);
            tracing::info!(
                achievement_id = achievement.id,
                activity_id = %activity.id,
                value = ?value,
                "Achievement unlocked"
            );

            self.unlocked_ids.insert(achievement.id.to_string());
            self.unlocked.push(UnlockedAchievement {
                achievement_id: achievement.id.to_string(),
                unlocked_date,
                value,
            });
            newly_unlocked.push(achievement);
        }

        newly_unlocked
    }

    // ─── Queries ─────────────────────────────────────────────────

    pub fn is_unlocked(&self, id: &str) -> bool {
        self.unlocked_ids.contains(id)
    }

    pub fn unlocked_date(&self, id: &str) -> Option<DateTime<Utc>> {
        self.unlocked
            .iter()
            .find(|u| u.achievement_id == id)
            .map(|u| u.unlocked_date)
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.len()
    }

    /// Size of the catalog.
    pub fn total_count(&self) -> usize {
        ACHIEVEMENTS.len()
    }

    /// The whole catalog grouped by category, regardless of unlock state.
    pub fn achievements_by_category(
        &self,
    ) -> BTreeMap<AchievementCategory, Vec<&'static Achievement>> {
        let mut grouped: BTreeMap<AchievementCategory, Vec<&'static Achievement>> =
            BTreeMap::new();
        for achievement in ACHIEVEMENTS {
            grouped
                .entry(achievement.category)
                .or_default()
                .push(achievement);
        }
        grouped
    }

    /// Most recent unlocks first.
    pub fn recent_unlocks(&self, limit: usize) -> Vec<&UnlockedAchievement> {
        let mut recent: Vec<&UnlockedAchievement> = self.unlocked.iter().collect();
        recent.sort_by(|a, b| b.unlocked_date.cmp(&a.unlocked_date));
        recent.truncate(limit);
        recent
    }
}

/// Whether `requirement` holds given post-update aggregates and the
/// activity that was just completed.
pub fn requirement_met(
    requirement: &AchievementRequirement,
    stats: &ActivityStats,
    activity: &Activity,
    streak: &StreakState,
) -> bool {
    use AchievementRequirement::*;
    match *requirement {
        TotalWorkouts { count } => stats.total_workouts >= count,
        TotalDistance { meters } => stats.total_distance >= meters,
        TotalSteps { count } => stats.total_steps >= count,
        StreakDays { days } => streak.current_streak >= days,
        SingleWorkoutDistance {
            meters,
            activity_type,
        } => activity.activity_type == activity_type && activity.distance.unwrap_or(0.0) >= meters,
        SingleWorkoutDuration {
            seconds,
            activity_type,
        } => activity.activity_type == activity_type && activity.duration_secs() >= seconds,
        MorningWorkouts { count } => stats.morning_workout_count >= count,
        WeekendWorkouts { count } => stats.weekend_workout_count >= count,
        DifferentActivities { count } => stats.distinct_activity_types.len() >= count,
        Laps { count } => activity.laps.unwrap_or(0) >= count,
        Calories { amount } => activity.calories >= amount,
        WorkoutsInWeek { .. } => false,
    }
}

/// The activity value recorded alongside an unlock.
fn triggering_value(requirement: &AchievementRequirement, activity: &Activity) -> Option<f64> {
    use AchievementRequirement::*;
    match requirement {
        SingleWorkoutDistance { .. } => activity.distance,
        SingleWorkoutDuration { .. } => Some(activity.duration_secs()),
        Laps { .. } => activity.laps.map(f64::from),
        Calories { .. } => Some(activity.calories),
        _ => None,
    }
}
