// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@kernel.org>

//! Activity Tracker: daily streaks and achievement badges for workouts
//!
//! This crate provides the streak and achievement rules plus a small API
//! server that records completed workouts and serves the derived state.

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod time_utils;

use config::Config;
use services::Tracker;
use tokio::sync::Mutex;

/// Shared application state.
///
/// All tracker mutation goes through the one mutex.
pub struct AppState {
    pub config: Config,
    pub tracker: Mutex<Tracker>,
}

impl AppState {
    pub fn new(config: Config, tracker: Tracker) -> Self {
        Self {
            config,
            tracker: Mutex::new(tracker),
        }
    }
}
