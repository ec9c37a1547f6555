//! Running aggregate counters consulted by cumulative achievement rules.
//!
//! These are rebuilt from the workout history at startup rather than
//! persisted on their own, so the history stays the single source of truth.

use chrono::{Datelike, TimeZone, Timelike, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::{Activity, ActivityType};

/// Workouts starting before this local hour count as morning workouts.
const MORNING_CUTOFF_HOUR: u32 = 8;

/// Aggregates over every recorded activity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ActivityStats {
    pub total_workouts: u32,
    /// Meters
    pub total_distance: f64,
    pub total_steps: u64,
    pub morning_workout_count: u32,
    pub weekend_workout_count: u32,
    /// Only ever grows
    pub distinct_activity_types: BTreeSet<ActivityType>,
}

impl ActivityStats {
    /// Rebuild aggregates from a workout history.
    pub fn from_history<'a, Tz, I>(activities: I, tz: &Tz) -> Self
    where
        Tz: TimeZone,
        I: IntoIterator<Item = &'a Activity>,
    {
        let mut stats = Self::default();
        for activity in activities {
            stats.update_from_activity(activity, tz);
        }
        stats
    }

    /// Fold one activity into the aggregates. Hour and weekday are taken
    /// from the activity's start in `tz`.
    pub fn update_from_activity<Tz: TimeZone>(&mut self, activity: &Activity, tz: &Tz) {
        self.total_workouts += 1;
        self.total_distance += activity.distance.unwrap_or(0.0);
        self.total_steps += u64::from(activity.steps.unwrap_or(0));
        self.distinct_activity_types.insert(activity.activity_type);

        let local_start = activity.start_date.with_timezone(tz);
        if local_start.hour() < MORNING_CUTOFF_HOUR {
            self.morning_workout_count += 1;
        }
        if matches!(local_start.weekday(), Weekday::Sat | Weekday::Sun) {
            self.weekend_workout_count += 1;
        }
    }
}
