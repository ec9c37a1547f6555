// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Daily and weekly fitness goals and progress rings.

use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

/// Displayed progress never exceeds twice the goal.
const MAX_PROGRESS_RATIO: f64 = 2.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserGoals {
    pub daily_step_goal: u32,
    /// kcal
    pub daily_calorie_goal: f64,
    pub daily_exercise_minutes: u32,
    pub weekly_workout_goal: u32,
    /// Meters
    pub weekly_distance_goal: f64,
}

impl Default for UserGoals {
    fn default() -> Self {
        Self {
            daily_step_goal: 10_000,
            daily_calorie_goal: 500.0,
            daily_exercise_minutes: 30,
            weekly_workout_goal: 5,
            weekly_distance_goal: 20_000.0,
        }
    }
}

/// Totals for one day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DailyProgress {
    pub steps: u32,
    pub calories: f64,
    pub exercise_minutes: u32,
    pub workouts: u32,
    pub distance: f64,
}

impl DailyProgress {
    pub fn move_progress(&self, goal: f64) -> f64 {
        capped_ratio(self.calories, goal)
    }

    pub fn exercise_progress(&self, goal: u32) -> f64 {
        capped_ratio(f64::from(self.exercise_minutes), f64::from(goal))
    }

    pub fn steps_progress(&self, goal: u32) -> f64 {
        capped_ratio(f64::from(self.steps), f64::from(goal))
    }
}

fn capped_ratio(current: f64, goal: f64) -> f64 {
    if goal <= 0.0 {
        return 0.0;
    }
    (current / goal).min(MAX_PROGRESS_RATIO)
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RingProgress {
    pub current: f64,
    pub goal: f64,
}

impl RingProgress {
    /// Fraction of the goal reached; 0 when there is no goal.
    pub fn percentage(&self) -> f64 {
        if self.goal <= 0.0 {
            0.0
        } else {
            self.current / self.goal
        }
    }

    pub fn is_complete(&self) -> bool {
        self.percentage() >= 1.0
    }

    pub fn display_percentage(&self) -> u32 {
        (self.percentage() * 100.0) as u32
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct DailyRings {
    pub move_ring: RingProgress,
    pub exercise_ring: RingProgress,
}

impl DailyRings {
    pub fn from_progress(progress: &DailyProgress, goals: &UserGoals) -> Self {
        Self {
            move_ring: RingProgress {
                current: progress.calories,
                goal: goals.daily_calorie_goal,
            },
            exercise_ring: RingProgress {
                current: f64::from(progress.exercise_minutes),
                goal: f64::from(goals.daily_exercise_minutes),
            },
        }
    }

    pub fn all_complete(&self) -> bool {
        self.move_ring.is_complete() && self.exercise_ring.is_complete()
    }
}
