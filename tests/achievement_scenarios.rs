// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Achievement evaluation scenarios.
//!
//! These drive the evaluator the way the tracker does: one call per
//! completed workout, with the streak as it stands after recording it.

use activity_tracker::models::{Achievement, ActivityType, StreakState};
use activity_tracker::services::{AchievementService, StreakService};
use chrono::Duration;
use std::collections::HashSet;

mod common;
use common::{local, workout};

fn ids(unlocked: &[&'static Achievement]) -> Vec<&'static str> {
    unlocked.iter().map(|a| a.id).collect()
}

fn streak_of(current: u32) -> StreakState {
    StreakState {
        current_streak: current,
        longest_streak: current,
        total_active_days: current,
        ..Default::default()
    }
}

#[test]
fn test_first_run_over_5k() {
    let mut service = AchievementService::default();
    let now = local(12, 17);
    let run = workout(ActivityType::Running, &now, 30).with_distance(5200.0);

    let unlocked = service.check_achievements(&run, &streak_of(1), &now);

    assert_eq!(ids(&unlocked), vec!["first_workout", "5k_run"]);
}

#[test]
fn test_first_run_under_5k() {
    let mut service = AchievementService::default();
    let now = local(12, 17);
    let run = workout(ActivityType::Running, &now, 20).with_distance(3000.0);

    let unlocked = service.check_achievements(&run, &streak_of(1), &now);

    assert!(ids(&unlocked).contains(&"first_workout"));
    assert!(!ids(&unlocked).contains(&"5k_run"));
}

#[test]
fn test_seven_day_streak_unlocks_streak_7() {
    let mut service = AchievementService::default();
    let now = local(12, 17);
    let walk = workout(ActivityType::Walking, &now, 15).with_calories(100.0);

    let unlocked = service.check_achievements(&walk, &streak_of(7), &now);

    assert!(ids(&unlocked).contains(&"streak_7"));
}

#[test]
fn test_5k_by_bike_does_not_count_as_run() {
    let mut service = AchievementService::default();
    let now = local(12, 17);
    let ride = workout(ActivityType::Cycling, &now, 30).with_distance(12_000.0);

    let unlocked = service.check_achievements(&ride, &streak_of(1), &now);

    assert_eq!(ids(&unlocked), vec!["first_workout"]);
}

#[test]
fn test_every_achievement_unlocks_at_most_once() {
    let mut service = AchievementService::default();
    let mut streak = StreakService::default();
    let mut seen = HashSet::new();

    // Two months of daily long runs before 8 AM
    let start = local(1, 7);
    for day in 0..60 {
        let now = start + Duration::days(day);
        streak.record_activity(&now);
        let run = workout(ActivityType::Running, &now, 240)
            .with_distance(43_000.0)
            .with_steps(40_000);

        for achievement in service.check_achievements(&run, streak.state(), &now) {
            assert!(
                seen.insert(achievement.id),
                "{} unlocked twice",
                achievement.id
            );
        }
    }

    for id in [
        "first_workout",
        "10_workouts",
        "50_workouts",
        "streak_7",
        "streak_30",
        "5k_run",
        "marathon",
        "early_bird",
        "weekend_warrior",
        "100k_steps",
        "1m_steps",
        "1000km",
    ] {
        assert!(service.is_unlocked(id), "{} should be unlocked", id);
    }
    assert!(!service.is_unlocked("streak_100"));
    assert!(!service.is_unlocked("variety"));
    assert_eq!(service.unlocked_count(), seen.len());
}

#[test]
fn test_early_bird_uses_local_start_hour() {
    let mut service = AchievementService::default();

    // Five workouts starting 06:30 local, on weekdays 3..=7 June
    for day in 3..=7 {
        let end = local(day, 7);
        let run = workout(ActivityType::Running, &end, 30);
        service.check_achievements(&run, &streak_of(1), &end);
    }

    assert_eq!(service.stats().morning_workout_count, 5);
    assert!(service.is_unlocked("early_bird"));
    assert_eq!(service.stats().weekend_workout_count, 0);
}

#[test]
fn test_weekend_warrior_after_ten_weekend_workouts() {
    let mut service = AchievementService::default();
    // June 2024 weekends: 1-2, 8-9, 15-16, 22-23, 29-30
    let weekend_days = [1, 2, 8, 9, 15, 16, 22, 23, 29, 30];

    for (i, &day) in weekend_days.iter().enumerate() {
        let end = local(day, 15);
        let ride = workout(ActivityType::Cycling, &end, 60);
        let unlocked = service.check_achievements(&ride, &streak_of(1), &end);

        let expected = i == weekend_days.len() - 1;
        assert_eq!(ids(&unlocked).contains(&"weekend_warrior"), expected);
    }
}

#[test]
fn test_recent_unlocks_newest_first() {
    let mut service = AchievementService::default();

    let first = local(12, 17);
    service.check_achievements(
        &workout(ActivityType::Walking, &first, 20),
        &streak_of(1),
        &first,
    );
    let later = local(14, 17);
    service.check_achievements(
        &workout(ActivityType::Running, &later, 30).with_distance(5100.0),
        &streak_of(1),
        &later,
    );

    let recent: Vec<&str> = service
        .recent_unlocks(5)
        .iter()
        .map(|u| u.achievement_id.as_str())
        .collect();
    assert_eq!(recent.first(), Some(&"5k_run"));
    assert_eq!(recent.last(), Some(&"first_workout"));
    assert_eq!(service.recent_unlocks(1).len(), 1);
}
