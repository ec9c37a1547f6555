// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Calendar days in the host's local zone across daylight saving changes.
//!
//! Every test here sets `TZ` to the same US Pacific rule before touching
//! `Local`, so tests in this binary never disagree about the zone.

use activity_tracker::db::Store;
use activity_tracker::models::{Activity, ActivityStats, ActivityType, StreakState};
use activity_tracker::services::Tracker;
use activity_tracker::time_utils::Zone;
use chrono::{DateTime, Duration, TimeZone, Timelike, Utc};

mod common;
use common::temp_data_dir;

/// US Pacific: PST with PDT from the second Sunday of March to the first
/// Sunday of November.
fn use_pacific_local_zone() {
    std::env::set_var("TZ", "PST8PDT,M3.2.0,M11.1.0");
}

fn utc(month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, month, day, hour, minute, 0)
        .unwrap()
}

fn workout_starting(kind: ActivityType, start: DateTime<Utc>) -> Activity {
    Activity::new(kind, start, start + Duration::minutes(40)).unwrap()
}

#[test]
fn test_streak_survives_fall_back() {
    use_pacific_local_zone();

    // 00:30 PDT on Sunday Nov 3, shortly before clocks go back
    let mut streak = StreakState {
        current_streak: 5,
        longest_streak: 5,
        total_active_days: 5,
        last_active_date: Some(utc(11, 3, 7, 30)),
        ..Default::default()
    };
    // Noon PST on Monday Nov 4
    let now = utc(11, 4, 20, 0).with_timezone(&Zone::Local);

    streak.check_status(&now);

    assert_eq!(streak.current_streak, 5);
    assert!(streak.is_streak_active(&now));
    assert_eq!(streak.days_until_streak_lost(&now), 1);

    // Today's offset applied to the old instant would put it on Nov 2
    assert!(!streak.is_streak_active(&now.fixed_offset()));
}

#[test]
fn test_streak_continues_across_spring_forward() {
    use_pacific_local_zone();

    let mut streak = StreakState::default();
    // 23:30 PST Saturday Mar 9, then 23:30 PDT Sunday Mar 10
    streak.record_activity(&utc(3, 10, 7, 30).with_timezone(&Zone::Local));
    streak.record_activity(&utc(3, 11, 6, 30).with_timezone(&Zone::Local));

    assert_eq!(streak.current_streak, 2);
    assert_eq!(streak.total_active_days, 2);
}

#[test]
fn test_morning_hour_uses_offset_at_workout_time() {
    use_pacific_local_zone();

    // 08:30 PDT: not a morning workout, though it would be 07:30 in PST
    let late = workout_starting(ActivityType::Running, utc(7, 3, 15, 30));
    // 07:30 PDT
    let early = workout_starting(ActivityType::Running, utc(7, 4, 14, 30));

    assert_eq!(late.start_date.with_timezone(&Zone::Local).hour(), 8);

    let stats = ActivityStats::from_history([&late, &early], &Zone::Local);
    assert_eq!(stats.morning_workout_count, 1);
}

#[test]
fn test_rebuilt_aggregates_match_live_counts() {
    use_pacific_local_zone();
    let dir = temp_data_dir();

    // Saturday Jul 6 and Monday Jul 8, both starting 08:30 PDT
    let workouts = [
        workout_starting(ActivityType::Cycling, utc(7, 6, 15, 30)),
        workout_starting(ActivityType::Cycling, utc(7, 8, 15, 30)),
    ];

    let live = {
        let first_end = workouts[0].end_date.with_timezone(&Zone::Local);
        let mut tracker = Tracker::load(Store::open(dir.path()).unwrap(), &first_end).unwrap();
        for workout in &workouts {
            let end = workout.end_date.with_timezone(&Zone::Local);
            tracker.complete_workout(workout.clone(), &end).unwrap();
        }
        tracker.achievements().stats().clone()
    };
    assert_eq!(live.morning_workout_count, 0);
    assert_eq!(live.weekend_workout_count, 1);

    // Restart in winter
    let winter = utc(12, 2, 18, 0).with_timezone(&Zone::Local);
    let reloaded = Tracker::load(Store::open(dir.path()).unwrap(), &winter).unwrap();

    assert_eq!(reloaded.achievements().stats(), &live);
}
