// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Data models for the application.

pub mod achievement;
pub mod activity;
pub mod goals;
pub mod stats;
pub mod streak;

pub use achievement::{
    Achievement, AchievementCategory, AchievementRequirement, UnlockedAchievement, ACHIEVEMENTS,
};
pub use activity::{Activity, ActivityCategory, ActivityError, ActivityType};
pub use goals::{DailyProgress, DailyRings, RingProgress, UserGoals};
pub use stats::ActivityStats;
pub use streak::{StreakState, StreakStatus};
