// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activity Tracker API Server
//!
//! Records completed workouts and serves streak and achievement state.

use activity_tracker::{config::Config, db::Store, services::Tracker, AppState};
use anyhow::Context;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured JSON logging
    init_logging()?;

    // Load configuration from environment
    let config = Config::from_env().context("Invalid configuration")?;
    tracing::info!(
        port = config.port,
        data_dir = %config.data_dir.display(),
        "Starting Activity Tracker API"
    );

    // Restore persisted tracker state
    let store = Store::open(&config.data_dir).with_context(|| {
        format!("Failed to open data directory {}", config.data_dir.display())
    })?;
    let tracker = Tracker::load(store, &config.now()).context("Failed to load tracker state")?;
    tracing::info!(
        current_streak = tracker.streak().current_streak(),
        unlocked = tracker.achievements().unlocked_count(),
        total = tracker.achievements().total_count(),
        "Tracker ready"
    );

    let state = Arc::new(AppState::new(config.clone(), tracker));

    // Build router
    let app = activity_tracker::routes::create_router(state);

    // Start server
    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!(address = %addr, "Server listening");

    axum::serve(listener, app).await?;
    Ok(())
}

/// Initialize structured JSON logging.
fn init_logging() -> anyhow::Result<()> {
    let format = tracing_subscriber::fmt::layer()
        .json()
        .with_target(false)
        .with_current_span(true)
        .flatten_event(true);

    tracing_subscriber::registry()
        .with(
            EnvFilter::from_default_env()
                .add_directive("activity_tracker=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .with(format)
        .init();
    Ok(())
}
