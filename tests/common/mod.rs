// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

use activity_tracker::config::Config;
use activity_tracker::db::Store;
use activity_tracker::models::{Activity, ActivityType};
use activity_tracker::routes::create_router;
use activity_tracker::services::Tracker;
use activity_tracker::AppState;
use chrono::{DateTime, Duration, FixedOffset, TimeZone, Utc};
use std::sync::Arc;
use tempfile::TempDir;

/// Local zone used by the rule tests (UTC-7).
#[allow(dead_code)]
pub fn pacific() -> FixedOffset {
    FixedOffset::west_opt(7 * 3600).unwrap()
}

/// `hour`:00 local time on 2024-06-`day`. June 2024 starts on a Saturday.
#[allow(dead_code)]
pub fn local(day: u32, hour: u32) -> DateTime<FixedOffset> {
    pacific()
        .with_ymd_and_hms(2024, 6, day, hour, 0, 0)
        .unwrap()
}

/// A workout of `minutes` ending at `end`.
#[allow(dead_code)]
pub fn workout<Tz: TimeZone>(kind: ActivityType, end: &DateTime<Tz>, minutes: i64) -> Activity {
    let end = end.with_timezone(&Utc);
    Activity::new(kind, end - Duration::minutes(minutes), end).expect("valid workout")
}

/// Scratch directory for file-backed stores, removed on drop.
#[allow(dead_code)]
pub fn temp_data_dir() -> TempDir {
    TempDir::new().expect("create scratch directory")
}

/// Create a test app backed by an in-memory store.
/// Returns the router and the shared state.
#[allow(dead_code)]
pub fn create_test_app() -> (axum::Router, Arc<AppState>) {
    let config = Config::default();
    let tracker =
        Tracker::load(Store::in_memory(), &config.now()).expect("in-memory store never fails");
    let state = Arc::new(AppState::new(config, tracker));
    (create_router(state.clone()), state)
}

/// Read a response body as JSON.
#[allow(dead_code)]
pub async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&body).expect("Body should be JSON")
}
