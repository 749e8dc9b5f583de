//! Per-user gamification state

use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::levels::LevelTable;

/// Points, level, badges and streak for one user.
///
/// `level` is always derived from `points` through the level table, so both
/// fields are only writable together via [`GamificationState::with_points`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GamificationState {
    points: u32,
    level: u32,
    badges: BTreeSet<String>,
    /// Consecutive active days, maintained by the caller
    pub streak: u32,
    pub last_login: Option<DateTime<Utc>>,
}

impl Default for GamificationState {
    fn default() -> Self {
        Self {
            points: 0,
            level: 1,
            badges: BTreeSet::new(),
            streak: 0,
            last_login: None,
        }
    }
}

impl GamificationState {
    /// Zero-value state for a user seen for the first time
    pub fn new(levels: &LevelTable) -> Self {
        Self {
            level: levels.first().level,
            ..Self::default()
        }
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn badges(&self) -> &BTreeSet<String> {
        &self.badges
    }

    pub fn has_badge(&self, badge_id: &str) -> bool {
        self.badges.contains(badge_id)
    }

    /// Set the point total and recompute the level from it
    pub fn with_points(mut self, points: u32, levels: &LevelTable) -> Self {
        self.points = points;
        self.level = levels.lookup(points).level;
        self
    }

    pub fn with_badges<I>(mut self, badges: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }

    /// Returns false if the badge was already owned
    pub(crate) fn insert_badge(&mut self, badge_id: &str) -> bool {
        self.badges.insert(badge_id.to_string())
    }
}
