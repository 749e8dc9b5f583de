//! Dónde Consigo - gamification core
//!
//! Tracks each user's points, level, badges and login streak for the
//! promotions app, and turns awards and unlocks into achievement toasts.
//!
//! ## Flow
//!
//! ```text
//! UI action -> PointsAwardEngine / BadgeUnlockEngine
//!           -> GamificationStore::save
//!           -> AchievementQueue::enqueue -> toast, auto-dismissed
//! ```
//!
//! [`gamification::GamificationManager`] wires these together for the
//! signed-in user.

pub mod config;
pub mod gamification;
pub mod store;

pub use gamification::*;
