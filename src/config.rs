//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use chrono::{DateTime, FixedOffset, Offset, Utc};
use std::env;
use std::path::PathBuf;

use crate::time_utils::Zone;

/// Largest UTC offset accepted, in minutes (UTC+14:00).
const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Server port
    pub port: u16,
    /// Directory holding the JSON state documents
    pub data_dir: PathBuf,
    /// Zone for calendar-day boundaries
    pub zone: Zone,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            port: 8080,
            data_dir: PathBuf::from("data"),
            zone: Zone::Fixed(Utc.fix()),
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let zone = match env::var("TZ_OFFSET_MINUTES") {
            Ok(raw) => Zone::Fixed(parse_offset(&raw)?),
            Err(_) => Zone::Local,
        };

        let port = match env::var("PORT") {
            Ok(raw) => raw.trim().parse().map_err(|_| ConfigError::Invalid {
                name: "PORT",
                value: raw.clone(),
            })?,
            Err(_) => 8080,
        };

        Ok(Self {
            port,
            data_dir: env::var("DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("data")),
            zone,
        })
    }

    /// The current instant in the configured time zone.
    pub fn now(&self) -> DateTime<Zone> {
        Utc::now().with_timezone(&self.zone)
    }
}

fn parse_offset(raw: &str) -> Result<FixedOffset, ConfigError> {
    let invalid = || ConfigError::Invalid {
        name: "TZ_OFFSET_MINUTES",
        value: raw.to_string(),
    };

    let minutes: i32 = raw.trim().parse().map_err(|_| invalid())?;
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(invalid());
    }
    FixedOffset::east_opt(minutes * 60).ok_or_else(invalid)
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value}")]
    Invalid { name: &'static str, value: String },
}
