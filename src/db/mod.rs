//! Persistence layer (local JSON documents).

pub mod store;

pub use store::{Store, StoreError};

/// Stable document keys.
pub mod keys {
    pub const STREAK: &str = "streak_data";
    pub const UNLOCKED_ACHIEVEMENTS: &str = "unlocked_achievements";
    /// Completed workout history, newest first
    pub const WORKOUTS: &str = "completed_workouts";
}
