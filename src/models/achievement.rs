// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Achievement badges: the static catalog and unlock records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::models::ActivityType;

/// Achievement grouping for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AchievementCategory {
    Milestone,
    Streak,
    PersonalBest,
    Consistency,
    ActivitySpecific,
}

impl AchievementCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            AchievementCategory::Milestone => "Milestones",
            AchievementCategory::Streak => "Streaks",
            AchievementCategory::PersonalBest => "Personal Bests",
            AchievementCategory::Consistency => "Consistency",
            AchievementCategory::ActivitySpecific => "Activity",
        }
    }
}

/// Threshold rule attached to an achievement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum AchievementRequirement {
    TotalWorkouts { count: u32 },
    TotalDistance { meters: f64 },
    TotalSteps { count: u64 },
    StreakDays { days: u32 },
    SingleWorkoutDistance { meters: f64, activity_type: ActivityType },
    SingleWorkoutDuration { seconds: f64, activity_type: ActivityType },
    /// Needs a weekly window that is not tracked; never satisfied.
    WorkoutsInWeek { count: u32 },
    MorningWorkouts { count: u32 },
    WeekendWorkouts { count: u32 },
    DifferentActivities { count: usize },
    Laps { count: u32 },
    Calories { amount: f64 },
}

/// Catalog entry. Never mutated.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: AchievementCategory,
    /// Symbol name for the badge artwork
    pub icon: &'static str,
    pub requirement: AchievementRequirement,
}

impl Achievement {
    const fn new(
        id: &'static str,
        name: &'static str,
        description: &'static str,
        category: AchievementCategory,
        icon: &'static str,
        requirement: AchievementRequirement,
    ) -> Self {
        Self {
            id,
            name,
            description,
            category,
            icon,
            requirement,
        }
    }
}

/// Record that an achievement was earned. At most one per achievement id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct UnlockedAchievement {
    pub achievement_id: String,
    pub unlocked_date: DateTime<Utc>,
    /// The activity value that triggered the unlock, where one applies
    #[serde(default)]
    pub value: Option<f64>,
}

use AchievementCategory::*;
use AchievementRequirement::*;

/// Every achievement, in evaluation order.
pub static ACHIEVEMENTS: &[Achievement] = &[
    // ─── Milestones ──────────────────────────────────────────────
    Achievement::new(
        "first_workout",
        "First Steps",
        "Complete your first workout",
        Milestone,
        "star.fill",
        TotalWorkouts { count: 1 },
    ),
    Achievement::new(
        "10_workouts",
        "Getting Started",
        "Complete 10 workouts",
        Milestone,
        "flame.fill",
        TotalWorkouts { count: 10 },
    ),
    Achievement::new(
        "50_workouts",
        "Dedicated",
        "Complete 50 workouts",
        Milestone,
        "medal.fill",
        TotalWorkouts { count: 50 },
    ),
    Achievement::new(
        "100_workouts",
        "Centurion",
        "Complete 100 workouts",
        Milestone,
        "trophy.fill",
        TotalWorkouts { count: 100 },
    ),
    Achievement::new(
        "1000km",
        "Distance Champion",
        "Cover 1,000 km total",
        Milestone,
        "map.fill",
        TotalDistance { meters: 1_000_000.0 },
    ),
    // ─── Streaks ─────────────────────────────────────────────────
    Achievement::new(
        "streak_7",
        "Week Warrior",
        "Maintain a 7-day streak",
        Streak,
        "flame.fill",
        StreakDays { days: 7 },
    ),
    Achievement::new(
        "streak_30",
        "Monthly Master",
        "Maintain a 30-day streak",
        Streak,
        "flame.circle.fill",
        StreakDays { days: 30 },
    ),
    Achievement::new(
        "streak_100",
        "Unstoppable",
        "Maintain a 100-day streak",
        Streak,
        "bolt.circle.fill",
        StreakDays { days: 100 },
    ),
    // ─── Personal Bests: Running ─────────────────────────────────
    Achievement::new(
        "5k_run",
        "5K Runner",
        "Run 5 km in a single workout",
        PersonalBest,
        "figure.run",
        SingleWorkoutDistance {
            meters: 5_000.0,
            activity_type: ActivityType::Running,
        },
    ),
    Achievement::new(
        "10k_run",
        "10K Runner",
        "Run 10 km in a single workout",
        PersonalBest,
        "figure.run",
        SingleWorkoutDistance {
            meters: 10_000.0,
            activity_type: ActivityType::Running,
        },
    ),
    Achievement::new(
        "half_marathon",
        "Half Marathoner",
        "Run 21.1 km in a single workout",
        PersonalBest,
        "figure.run",
        SingleWorkoutDistance {
            meters: 21_100.0,
            activity_type: ActivityType::Running,
        },
    ),
    Achievement::new(
        "marathon",
        "Marathoner",
        "Run 42.2 km in a single workout",
        PersonalBest,
        "figure.run.circle.fill",
        SingleWorkoutDistance {
            meters: 42_200.0,
            activity_type: ActivityType::Running,
        },
    ),
    // ─── Activity Specific ───────────────────────────────────────
    Achievement::new(
        "century_ride",
        "Century Rider",
        "Cycle 100 km in a single ride",
        ActivitySpecific,
        "figure.outdoor.cycle",
        SingleWorkoutDistance {
            meters: 100_000.0,
            activity_type: ActivityType::Cycling,
        },
    ),
    Achievement::new(
        "100_laps",
        "Pool Shark",
        "Swim 100 laps in a single session",
        ActivitySpecific,
        "figure.pool.swim",
        Laps { count: 100 },
    ),
    // ─── Consistency ─────────────────────────────────────────────
    Achievement::new(
        "early_bird",
        "Early Bird",
        "Complete 5 workouts before 8 AM",
        Consistency,
        "sunrise.fill",
        MorningWorkouts { count: 5 },
    ),
    Achievement::new(
        "weekend_warrior",
        "Weekend Warrior",
        "Complete 10 weekend workouts",
        Consistency,
        "calendar.badge.checkmark",
        WeekendWorkouts { count: 10 },
    ),
    Achievement::new(
        "variety",
        "Jack of All Trades",
        "Try 5 different activities",
        Consistency,
        "star.circle.fill",
        DifferentActivities { count: 5 },
    ),
    // ─── Steps ───────────────────────────────────────────────────
    Achievement::new(
        "100k_steps",
        "Step Master",
        "Walk 100,000 steps total",
        Milestone,
        "figure.walk",
        TotalSteps { count: 100_000 },
    ),
    Achievement::new(
        "1m_steps",
        "Million Stepper",
        "Walk 1,000,000 steps total",
        Milestone,
        "figure.walk.diamond.fill",
        TotalSteps { count: 1_000_000 },
    ),
];

/// Look up a catalog entry by its stable id.
pub fn find(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}
