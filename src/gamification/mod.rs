//! Gamification system: Points, Levels, Badges, Streaks and Achievement toasts
//!
//! The engines are pure: they take a [`GamificationState`] and return the next
//! one plus the [`Achievement`]s to show. [`GamificationManager`] ties them to a
//! store and a display queue for the signed-in user.

mod achievement;
mod actions;
mod badges;
pub(crate) mod levels;
mod manager;
mod points;
mod profile;
mod queue;
mod state;
mod streaks;

pub use achievement::{Achievement, AchievementKind, AchievementValue, Animation};
pub use actions::{ActionKind, PointsTable};
pub use badges::{BadgeCatalog, BadgeDef, BadgeUnlockEngine};
pub use levels::{LevelInfo, LevelProgress, LevelTable, MAX_LEVEL_NAME};
pub use manager::{GamificationManager, ManagerOutcome, Saved, Summary};
pub use points::PointsAwardEngine;
pub use profile::ProfileSnapshot;
pub use queue::{AchievementQueue, Phase, QueueTiming, ScheduledTask, TaskKind};
pub use state::GamificationState;
pub use streaks::next_streak;

/// Error type for gamification operations
#[derive(Debug, thiserror::Error)]
pub enum GamificationError {
    #[error("Unknown action `{0}` and no point override given")]
    UnknownAction(String),

    #[error("Unknown badge `{0}`")]
    UnknownBadge(String),
}

/// Result of an award or unlock: the next state and the events it produced
#[derive(Debug, Clone)]
pub struct Outcome {
    pub state: GamificationState,
    pub events: Vec<Achievement>,
}

/// Validated run-time tables, built by `Config::rules`
#[derive(Debug, Clone)]
pub struct Rules {
    pub points: PointsTable,
    pub levels: LevelTable,
    pub badges: BadgeCatalog,
    pub queue: QueueTiming,
}
