// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Consecutive-day activity streak.
//!
//! Continuity is judged by calendar day, never by elapsed hours. Every
//! operation takes `now` as a zoned instant and the stored
//! `last_active_date` is projected into the same zone before comparing.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;

use crate::time_utils::{calendar_day, day_difference};

/// Persisted streak record.
///
/// Invariants: `longest_streak >= current_streak` and
/// `total_active_days >= current_streak`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StreakState {
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default)]
    pub longest_streak: u32,
    #[serde(default)]
    pub last_active_date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub weekly_goals_met: u32,
    #[serde(default)]
    pub total_active_days: u32,
}

impl StreakState {
    /// Days from the last active day to today, or `None` if never active.
    fn days_since_last_active<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> Option<i64> {
        let last = self.last_active_date.as_ref()?;
        let tz = now.timezone();
        Some(day_difference(
            calendar_day(last, &tz),
            now.date_naive(),
        ))
    }

    /// Record a completed activity at `now`.
    ///
    /// Returns `true` if the state changed. A second activity on the same
    /// calendar day, or one dated before the last active day, changes nothing.
    pub fn record_activity<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) -> bool {
        match self.days_since_last_active(now) {
            None => self.current_streak = 1,
            Some(1) => self.current_streak += 1,
            Some(days) if days > 1 => self.current_streak = 1,
            // Same day, or backdated before the last active day
            Some(_) => return false,
        }

        self.total_active_days += 1;
        self.last_active_date = Some(now.with_timezone(&Utc));
        if self.current_streak > self.longest_streak {
            self.longest_streak = self.current_streak;
        }
        true
    }

    /// Zero the current streak if more than one calendar day has passed
    /// since the last activity. Idempotent.
    pub fn check_status<Tz: TimeZone>(&mut self, now: &DateTime<Tz>) {
        if self.days_since_last_active(now).is_some_and(|days| days > 1) {
            self.current_streak = 0;
        }
    }

    /// True if the last activity was today or yesterday.
    pub fn is_streak_active<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.days_since_last_active(now).is_some_and(|days| days <= 1)
    }

    pub fn has_activity_today<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> bool {
        self.days_since_last_active(now) == Some(0)
    }

    /// Countdown for the UI: 2 on the day of the last activity, 1 during the
    /// grace day after it, 0 once the streak has lapsed or if never active.
    pub fn days_until_streak_lost<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> u32 {
        match self.days_since_last_active(now) {
            None => 0,
            Some(days) if days >= 2 => 0,
            Some(1) => 1,
            Some(_) => 2,
        }
    }

    pub fn status<Tz: TimeZone>(&self, now: &DateTime<Tz>) -> StreakStatus {
        if self.has_activity_today(now) {
            StreakStatus::CompletedToday
        } else if self.is_streak_active(now) {
            StreakStatus::AtRisk {
                days_remaining: self.days_until_streak_lost(now),
            }
        } else {
            StreakStatus::Broken
        }
    }
}

/// Streak condition as shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum StreakStatus {
    CompletedToday,
    AtRisk { days_remaining: u32 },
    Broken,
}

impl StreakStatus {
    pub fn message(&self, current_streak: u32) -> String {
        match self {
            StreakStatus::CompletedToday => {
                format!("Great job! You're on a {}-day streak!", current_streak)
            }
            StreakStatus::AtRisk { days_remaining: 1 } => {
                "Complete a workout today to keep your streak!".to_string()
            }
            StreakStatus::AtRisk { days_remaining } => {
                format!("You have {} days to keep your streak going", days_remaining)
            }
            StreakStatus::Broken => "Start a new streak today!".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, FixedOffset};

    fn pacific() -> FixedOffset {
        FixedOffset::west_opt(7 * 3600).unwrap()
    }

    /// Noon local time on 2024-06-`day`.
    fn local_noon(day: u32) -> DateTime<FixedOffset> {
        pacific().with_ymd_and_hms(2024, 6, day, 12, 0, 0).unwrap()
    }

    fn state_last_active(current: u32, longest: u32, at: DateTime<FixedOffset>) -> StreakState {
        StreakState {
            current_streak: current,
            longest_streak: longest,
            last_active_date: Some(at.with_timezone(&Utc)),
            weekly_goals_met: 0,
            total_active_days: 50,
        }
    }

    #[test]
    fn test_new_streak_starts_at_zero() {
        let streak = StreakState::default();
        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 0);
        assert_eq!(streak.last_active_date, None);
    }

    #[test]
    fn test_record_first_activity() {
        let mut streak = StreakState::default();
        assert!(streak.record_activity(&local_noon(10)));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 1);
        assert_eq!(streak.total_active_days, 1);
        assert!(streak.last_active_date.is_some());
    }

    #[test]
    fn test_consecutive_day_increases_streak() {
        let mut streak = state_last_active(5, 10, local_noon(9));
        streak.record_activity(&local_noon(10));

        assert_eq!(streak.current_streak, 6);
        assert_eq!(streak.longest_streak, 10);
        assert_eq!(streak.total_active_days, 51);
    }

    #[test]
    fn test_missed_day_resets_streak() {
        let mut streak = state_last_active(5, 10, local_noon(7));
        streak.record_activity(&local_noon(10));

        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.longest_streak, 10);
        assert_eq!(streak.total_active_days, 51);
    }

    #[test]
    fn test_same_day_does_not_change_state() {
        let mut streak = state_last_active(5, 10, local_noon(10));
        let before = streak.clone();

        assert!(!streak.record_activity(&(local_noon(10) + Duration::hours(6))));
        assert_eq!(streak, before);
    }

    #[test]
    fn test_backdated_activity_is_ignored() {
        let mut streak = state_last_active(5, 10, local_noon(10));
        let before = streak.clone();

        assert!(!streak.record_activity(&local_noon(8)));
        assert_eq!(streak, before);
    }

    #[test]
    fn test_new_longest_streak_is_recorded() {
        let mut streak = state_last_active(9, 9, local_noon(9));
        streak.record_activity(&local_noon(10));

        assert_eq!(streak.current_streak, 10);
        assert_eq!(streak.longest_streak, 10);
    }

    #[test]
    fn test_calendar_day_not_elapsed_hours() {
        // 23:30 then 00:15 the next day: 45 minutes apart, but consecutive days
        let late = pacific().with_ymd_and_hms(2024, 6, 9, 23, 30, 0).unwrap();
        let early = pacific().with_ymd_and_hms(2024, 6, 10, 0, 15, 0).unwrap();

        let mut streak = StreakState::default();
        streak.record_activity(&late);
        streak.record_activity(&early);
        assert_eq!(streak.current_streak, 2);

        // 00:15 then 23:45 the same day: almost 24 hours, still one day
        let mut streak = StreakState::default();
        streak.record_activity(&early);
        streak.record_activity(&pacific().with_ymd_and_hms(2024, 6, 10, 23, 45, 0).unwrap());
        assert_eq!(streak.current_streak, 1);
        assert_eq!(streak.total_active_days, 1);
    }

    #[test]
    fn test_is_streak_active_today_and_yesterday() {
        let today = state_last_active(5, 5, local_noon(10));
        assert!(today.is_streak_active(&local_noon(10)));
        assert!(today.has_activity_today(&local_noon(10)));

        let yesterday = state_last_active(5, 5, local_noon(9));
        assert!(yesterday.is_streak_active(&local_noon(10)));
        assert!(!yesterday.has_activity_today(&local_noon(10)));

        let two_days_ago = state_last_active(5, 5, local_noon(8));
        assert!(!two_days_ago.is_streak_active(&local_noon(10)));
    }

    #[test]
    fn test_check_status_resets_old_streak() {
        let mut streak = state_last_active(5, 10, local_noon(7));
        streak.check_status(&local_noon(10));

        assert_eq!(streak.current_streak, 0);
        assert_eq!(streak.longest_streak, 10);
        assert_eq!(streak.total_active_days, 50);
        assert!(streak.last_active_date.is_some());
    }

    #[test]
    fn test_check_status_keeps_active_streak() {
        let mut streak = state_last_active(5, 10, local_noon(9));
        streak.check_status(&local_noon(10));
        assert_eq!(streak.current_streak, 5);

        let mut fresh = StreakState::default();
        fresh.check_status(&local_noon(10));
        assert_eq!(fresh, StreakState::default());
    }

    #[test]
    fn test_days_until_streak_lost() {
        let streak = state_last_active(3, 3, local_noon(10));

        assert_eq!(streak.days_until_streak_lost(&local_noon(10)), 2);
        assert_eq!(streak.days_until_streak_lost(&local_noon(11)), 1);
        assert_eq!(streak.days_until_streak_lost(&local_noon(12)), 0);
        assert_eq!(StreakState::default().days_until_streak_lost(&local_noon(10)), 0);
    }

    #[test]
    fn test_status_and_message() {
        let streak = state_last_active(4, 4, local_noon(10));

        assert_eq!(streak.status(&local_noon(10)), StreakStatus::CompletedToday);
        assert_eq!(
            streak.status(&local_noon(11)),
            StreakStatus::AtRisk { days_remaining: 1 }
        );
        assert_eq!(streak.status(&local_noon(12)), StreakStatus::Broken);

        assert_eq!(
            StreakStatus::CompletedToday.message(4),
            "Great job! You're on a 4-day streak!"
        );
        assert_eq!(
            StreakStatus::AtRisk { days_remaining: 1 }.message(4),
            "Complete a workout today to keep your streak!"
        );
        assert_eq!(StreakStatus::Broken.message(0), "Start a new streak today!");
    }
}
