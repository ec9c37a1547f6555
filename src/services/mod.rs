// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Services module - business logic layer.

pub mod achievement;
pub mod streak;
pub mod tracker;
pub mod workout;

pub use achievement::AchievementService;
pub use streak::StreakService;
pub use tracker::{Tracker, WorkoutOutcome};
pub use workout::{TodayStats, WorkoutLog};
