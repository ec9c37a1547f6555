// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Completed workout model and the closed set of activity kinds.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;

/// Every activity kind the tracker knows about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub enum ActivityType {
    // ─── Cardio ──────────────────────────────────────────────────
    Steps,
    Running,
    Walking,
    Cycling,
    Swimming,
    Hiking,

    // ─── Gym & Strength ──────────────────────────────────────────
    StrengthTraining,
    Hiit,
    FunctionalTraining,
    CoreTraining,
    Rowing,
    Elliptical,
    StairClimbing,

    // ─── Mind & Body ─────────────────────────────────────────────
    Yoga,
    Pilates,
    Stretching,

    Other,
}

/// Coarse grouping of activity kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ActivityCategory {
    Cardio,
    Gym,
    MindBody,
    Other,
}

impl ActivityType {
    pub const ALL: [ActivityType; 17] = [
        ActivityType::Steps,
        ActivityType::Running,
        ActivityType::Walking,
        ActivityType::Cycling,
        ActivityType::Swimming,
        ActivityType::Hiking,
        ActivityType::StrengthTraining,
        ActivityType::Hiit,
        ActivityType::FunctionalTraining,
        ActivityType::CoreTraining,
        ActivityType::Rowing,
        ActivityType::Elliptical,
        ActivityType::StairClimbing,
        ActivityType::Yoga,
        ActivityType::Pilates,
        ActivityType::Stretching,
        ActivityType::Other,
    ];

    /// Whether a workout of this kind records a GPS route.
    pub fn uses_gps(self) -> bool {
        matches!(
            self,
            ActivityType::Running
                | ActivityType::Walking
                | ActivityType::Cycling
                | ActivityType::Hiking
                | ActivityType::Swimming
        )
    }

    pub fn category(self) -> ActivityCategory {
        use ActivityType::*;
        match self {
            Steps | Running | Walking | Cycling | Swimming | Hiking => ActivityCategory::Cardio,
            StrengthTraining | Hiit | FunctionalTraining | CoreTraining | Rowing | Elliptical
            | StairClimbing => ActivityCategory::Gym,
            Yoga | Pilates | Stretching => ActivityCategory::MindBody,
            Other => ActivityCategory::Other,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            ActivityType::Steps => "Steps",
            ActivityType::Running => "Running",
            ActivityType::Walking => "Walking",
            ActivityType::Cycling => "Cycling",
            ActivityType::Swimming => "Swimming",
            ActivityType::Hiking => "Hiking",
            ActivityType::StrengthTraining => "Strength Training",
            ActivityType::Hiit => "HIIT",
            ActivityType::FunctionalTraining => "Functional Training",
            ActivityType::CoreTraining => "Core Training",
            ActivityType::Rowing => "Rowing",
            ActivityType::Elliptical => "Elliptical",
            ActivityType::StairClimbing => "Stair Climbing",
            ActivityType::Yoga => "Yoga",
            ActivityType::Pilates => "Pilates",
            ActivityType::Stretching => "Stretching",
            ActivityType::Other => "Other",
        }
    }

    /// Unit of the headline metric shown for this kind.
    pub fn primary_metric_unit(self) -> &'static str {
        use ActivityType::*;
        match self {
            Steps => "steps",
            Swimming => "laps",
            StrengthTraining | Hiit | FunctionalTraining | CoreTraining => "reps",
            _ => "km",
        }
    }
}

impl ActivityCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            ActivityCategory::Cardio => "Cardio",
            ActivityCategory::Gym => "Gym & Strength",
            ActivityCategory::MindBody => "Mind & Body",
            ActivityCategory::Other => "Other",
        }
    }

    /// Activity kinds belonging to this category, in declaration order.
    pub fn activities(self) -> Vec<ActivityType> {
        ActivityType::ALL
            .into_iter()
            .filter(|t| t.category() == self)
            .collect()
    }
}

/// A completed workout. Produced by the recording side and never mutated here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct Activity {
    pub id: Uuid,
    pub activity_type: ActivityType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    /// Active energy (kcal)
    #[serde(default)]
    pub calories: f64,
    /// Distance in meters
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[serde(default)]
    pub average_heart_rate: Option<u32>,
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    /// Pool laps (swimming)
    #[serde(default)]
    pub laps: Option<u32>,
    #[serde(default)]
    pub location_name: Option<String>,
}

impl Activity {
    /// Create an activity with no metrics recorded.
    pub fn new(
        activity_type: ActivityType,
        start_date: DateTime<Utc>,
        end_date: DateTime<Utc>,
    ) -> Result<Self, ActivityError> {
        if end_date < start_date {
            return Err(ActivityError::NegativeDuration);
        }

        Ok(Self {
            id: Uuid::new_v4(),
            activity_type,
            start_date,
            end_date,
            calories: 0.0,
            distance: None,
            steps: None,
            average_heart_rate: None,
            max_heart_rate: None,
            laps: None,
            location_name: None,
        })
    }

    pub fn with_calories(mut self, calories: f64) -> Self {
        self.calories = calories;
        self
    }

    pub fn with_distance(mut self, meters: f64) -> Self {
        self.distance = Some(meters);
        self
    }

    pub fn with_steps(mut self, steps: u32) -> Self {
        self.steps = Some(steps);
        self
    }

    pub fn with_laps(mut self, laps: u32) -> Self {
        self.laps = Some(laps);
        self
    }

    /// Elapsed time in seconds.
    pub fn duration_secs(&self) -> f64 {
        (self.end_date - self.start_date).num_milliseconds() as f64 / 1000.0
    }

    /// Pace in seconds per kilometer, if a non-zero distance was recorded.
    pub fn pace_secs_per_km(&self) -> Option<f64> {
        let distance = self.distance.filter(|d| *d > 0.0)?;
        Some(self.duration_secs() / (distance / 1000.0))
    }

    /// `h:mm:ss`, or `m:ss` under an hour.
    pub fn formatted_duration(&self) -> String {
        let total = self.duration_secs() as u64;
        let (hours, minutes, seconds) = (total / 3600, (total % 3600) / 60, total % 60);
        if hours > 0 {
            format!("{}:{:02}:{:02}", hours, minutes, seconds)
        } else {
            format!("{}:{:02}", minutes, seconds)
        }
    }

    pub fn formatted_distance(&self) -> Option<String> {
        let meters = self.distance?;
        if meters >= 1000.0 {
            Some(format!("{:.2} km", meters / 1000.0))
        } else {
            Some(format!("{:.0} m", meters))
        }
    }

    pub fn formatted_pace(&self) -> Option<String> {
        let pace = self.pace_secs_per_km()? as u64;
        Some(format!("{}:{:02} /km", pace / 60, pace % 60))
    }

    /// Plain-text summary for sharing, one metric per line.
    pub fn text_summary(&self) -> String {
        let mut lines = vec![
            self.activity_type.display_name().to_string(),
            format!("Duration: {}", self.formatted_duration()),
        ];
        if let Some(distance) = self.formatted_distance() {
            lines.push(format!("Distance: {}", distance));
        }
        lines.push(format!("Calories: {} cal", self.calories as i64));
        if let Some(hr) = self.average_heart_rate {
            lines.push(format!("Avg HR: {} bpm", hr));
        }
        if let Some(pace) = self.formatted_pace() {
            lines.push(format!("Pace: {}", pace));
        }
        lines.push(String::new());
        lines.push("Tracked with Activity Tracker".to_string());
        lines.join("\n")
    }
}

/// Errors from constructing an activity.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ActivityError {
    #[error("Activity ends before it starts")]
    NegativeDuration,
}
