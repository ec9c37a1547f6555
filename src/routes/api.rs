// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! API routes for streaks, workouts, and achievements.

use crate::error::{AppError, Result};
use crate::models::{
    Achievement, AchievementCategory, Activity, ActivityType, DailyRings, StreakStatus,
    UserGoals,
};
use crate::services::{AchievementService, StreakService};
use crate::time_utils::{format_utc_rfc3339, Zone};
use crate::AppState;
use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
#[cfg(feature = "binding-generation")]
use ts_rs::TS;
use uuid::Uuid;
use validator::Validate;

const MAX_LIMIT: usize = 100;

pub fn routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/streak", get(get_streak))
        .route("/api/streak/weekly-goal", post(record_weekly_goal))
        .route("/api/workouts", get(get_workouts).post(complete_workout))
        .route("/api/workouts/{id}", axum::routing::delete(delete_workout))
        .route("/api/workouts/{id}/share", get(share_workout))
        .route("/api/achievements", get(get_achievements))
        .route("/api/achievements/recent", get(get_recent_achievements))
        .route("/api/stats/today", get(get_today_stats))
}

#[derive(Deserialize)]
struct LimitQuery {
    limit: Option<usize>,
}

impl LimitQuery {
    fn resolve(&self, default: usize) -> Result<usize> {
        match self.limit {
            Some(0) => Err(AppError::BadRequest(
                "'limit' must be greater than 0".to_string(),
            )),
            Some(limit) => Ok(limit.min(MAX_LIMIT)),
            None => Ok(default),
        }
    }
}

// ─── Streak ──────────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct StreakResponse {
    pub current_streak: u32,
    pub longest_streak: u32,
    pub total_active_days: u32,
    pub weekly_goals_met: u32,
    pub last_active_date: Option<String>,
    pub status: StreakStatus,
    pub message: String,
    pub is_streak_active: bool,
    pub has_activity_today: bool,
    pub days_until_streak_lost: u32,
}

impl StreakResponse {
    fn build(streak: &StreakService, now: &DateTime<Zone>) -> Self {
        let state = streak.state();
        Self {
            current_streak: state.current_streak,
            longest_streak: state.longest_streak,
            total_active_days: state.total_active_days,
            weekly_goals_met: state.weekly_goals_met,
            last_active_date: state.last_active_date.map(format_utc_rfc3339),
            status: streak.status(now),
            message: streak.message(now),
            is_streak_active: state.is_streak_active(now),
            has_activity_today: state.has_activity_today(now),
            days_until_streak_lost: state.days_until_streak_lost(now),
        }
    }
}

/// Current streak. Lapses a stale streak first, so this doubles as the
/// resume check.
async fn get_streak(State(state): State<Arc<AppState>>) -> Result<Json<StreakResponse>> {
    let now = state.config.now();
    let mut tracker = state.tracker.lock().await;
    tracker.resume(&now)?;
    Ok(Json(StreakResponse::build(tracker.streak(), &now)))
}

async fn record_weekly_goal(State(state): State<Arc<AppState>>) -> Result<Json<StreakResponse>> {
    let now = state.config.now();
    let mut tracker = state.tracker.lock().await;
    tracker.record_weekly_goal_met()?;
    tracing::info!(
        weekly_goals_met = tracker.streak().state().weekly_goals_met,
        "Weekly goal recorded"
    );
    Ok(Json(StreakResponse::build(tracker.streak(), &now)))
}

// ─── Workouts ────────────────────────────────────────────────

/// Completed workout as submitted by a client.
#[derive(Deserialize, Validate, Debug)]
pub struct WorkoutRequest {
    pub activity_type: ActivityType,
    pub start_date: DateTime<Utc>,
    pub end_date: DateTime<Utc>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub calories: Option<f64>,
    #[validate(range(min = 0.0))]
    #[serde(default)]
    pub distance: Option<f64>,
    #[serde(default)]
    pub steps: Option<u32>,
    #[validate(range(min = 20, max = 250))]
    #[serde(default)]
    pub average_heart_rate: Option<u32>,
    #[validate(range(min = 20, max = 250))]
    #[serde(default)]
    pub max_heart_rate: Option<u32>,
    #[serde(default)]
    pub laps: Option<u32>,
    #[validate(length(max = 100))]
    #[serde(default)]
    pub location_name: Option<String>,
}

impl TryFrom<WorkoutRequest> for Activity {
    type Error = AppError;

    fn try_from(req: WorkoutRequest) -> Result<Self> {
        req.validate()
            .map_err(|e| AppError::BadRequest(e.to_string()))?;

        let mut activity = Activity::new(req.activity_type, req.start_date, req.end_date)?;
        activity.calories = req.calories.unwrap_or(0.0);
        activity.distance = req.distance;
        activity.steps = req.steps;
        activity.average_heart_rate = req.average_heart_rate;
        activity.max_heart_rate = req.max_heart_rate;
        activity.laps = req.laps;
        activity.location_name = req.location_name;
        Ok(activity)
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutResponse {
    pub activity_id: Uuid,
    pub streak: StreakResponse,
    pub unlocked: Vec<AchievementSummary>,
}

/// Record a completed workout.
async fn complete_workout(
    State(state): State<Arc<AppState>>,
    Json(payload): Json<WorkoutRequest>,
) -> Result<(StatusCode, Json<WorkoutResponse>)> {
    let activity = Activity::try_from(payload)?;
    let activity_id = activity.id;
    let now = state.config.now();

    let mut tracker = state.tracker.lock().await;
    let outcome = tracker.complete_workout(activity, &now)?;

    let achievements = tracker.achievements();
    let unlocked = outcome
        .unlocked
        .iter()
        .map(|a| AchievementSummary::build(a, achievements))
        .collect();

    Ok((
        StatusCode::CREATED,
        Json(WorkoutResponse {
            activity_id,
            streak: StreakResponse::build(tracker.streak(), &now),
            unlocked,
        }),
    ))
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct WorkoutsResponse {
    pub workouts: Vec<Activity>,
    pub total: usize,
}

/// Most recent workouts first.
async fn get_workouts(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<WorkoutsResponse>> {
    let limit = params.resolve(10)?;
    let tracker = state.tracker.lock().await;
    let log = tracker.workouts();

    Ok(Json(WorkoutsResponse {
        workouts: log.recent(limit).to_vec(),
        total: log.total_count(),
    }))
}

async fn delete_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode> {
    let mut tracker = state.tracker.lock().await;
    if tracker.delete_workout(id)? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::NotFound(format!("Workout {} not found", id)))
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct ShareResponse {
    pub text: String,
}

/// Plain-text summary of one workout.
async fn share_workout(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ShareResponse>> {
    let tracker = state.tracker.lock().await;
    let workout = tracker
        .workouts()
        .get(id)
        .ok_or_else(|| AppError::NotFound(format!("Workout {} not found", id)))?;

    Ok(Json(ShareResponse {
        text: workout.text_summary(),
    }))
}

// ─── Achievements ────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AchievementSummary {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: AchievementCategory,
    pub icon: String,
    pub unlocked: bool,
    pub unlocked_date: Option<String>,
}

impl AchievementSummary {
    fn build(achievement: &Achievement, service: &AchievementService) -> Self {
        Self {
            id: achievement.id.to_string(),
            name: achievement.name.to_string(),
            description: achievement.description.to_string(),
            category: achievement.category,
            icon: achievement.icon.to_string(),
            unlocked: service.is_unlocked(achievement.id),
            unlocked_date: service.unlocked_date(achievement.id).map(format_utc_rfc3339),
        }
    }
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct CategoryGroup {
    pub category: AchievementCategory,
    pub display_name: String,
    pub achievements: Vec<AchievementSummary>,
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct AchievementsResponse {
    pub unlocked_count: usize,
    pub total_count: usize,
    pub categories: Vec<CategoryGroup>,
}

/// The full catalog with unlock state, grouped by category.
async fn get_achievements(State(state): State<Arc<AppState>>) -> Json<AchievementsResponse> {
    let tracker = state.tracker.lock().await;
    let service = tracker.achievements();

    let categories = service
        .achievements_by_category()
        .into_iter()
        .map(|(category, achievements)| CategoryGroup {
            category,
            display_name: category.display_name().to_string(),
            achievements: achievements
                .into_iter()
                .map(|a| AchievementSummary::build(a, service))
                .collect(),
        })
        .collect();

    Json(AchievementsResponse {
        unlocked_count: service.unlocked_count(),
        total_count: service.total_count(),
        categories,
    })
}

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct RecentUnlock {
    pub achievement: AchievementSummary,
    pub value: Option<f64>,
}

async fn get_recent_achievements(
    State(state): State<Arc<AppState>>,
    Query(params): Query<LimitQuery>,
) -> Result<Json<Vec<RecentUnlock>>> {
    let limit = params.resolve(5)?;
    let tracker = state.tracker.lock().await;
    let service = tracker.achievements();

    let recent = service
        .recent_unlocks(limit)
        .into_iter()
        .filter_map(|unlock| {
            // Unknown ids can only come from a catalog that has since shrunk
            let achievement = crate::models::achievement::find(&unlock.achievement_id)?;
            Some(RecentUnlock {
                achievement: AchievementSummary::build(achievement, service),
                value: unlock.value,
            })
        })
        .collect();

    Ok(Json(recent))
}

// ─── Daily Stats ─────────────────────────────────────────────

#[derive(Serialize, Debug)]
#[cfg_attr(feature = "binding-generation", derive(TS))]
#[cfg_attr(
    feature = "binding-generation",
    ts(export, export_to = "web/src/lib/generated/")
)]
pub struct TodayResponse {
    pub calories: f64,
    /// Meters
    pub distance: f64,
    pub duration_secs: f64,
    pub workouts: usize,
    pub rings: DailyRings,
    pub all_rings_complete: bool,
}

async fn get_today_stats(State(state): State<Arc<AppState>>) -> Json<TodayResponse> {
    let now = state.config.now();
    let tracker = state.tracker.lock().await;
    let today = tracker.workouts().today_stats(&now);
    let rings = DailyRings::from_progress(&today.to_progress(), &UserGoals::default());

    Json(TodayResponse {
        calories: today.calories,
        distance: today.distance,
        duration_secs: today.duration_secs,
        workouts: today.workouts,
        rings,
        all_rings_complete: rings.all_complete(),
    })
}
