//! Level table
//!
//! Maps cumulative points onto levels and computes progress towards the next one.

use serde::{Deserialize, Serialize};

/// Name reported as the "next level" once the highest level is reached
pub const MAX_LEVEL_NAME: &str = "max level";

/// Level definition
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelInfo {
    pub level: u32,
    /// Inclusive lower bound
    pub min: u32,
    /// Inclusive upper bound. The last entry's max is only a display ceiling.
    pub max: u32,
    pub name: String,
    pub emoji: String,
    pub color: String,
}

/// Progress from the current level towards the next one
#[derive(Debug, Clone, PartialEq)]
pub struct LevelProgress {
    /// 0.0 - 100.0
    pub percent: f64,
    pub points_needed: u32,
    pub next_level_name: String,
}

impl LevelProgress {
    fn max_level() -> Self {
        Self {
            percent: 100.0,
            points_needed: 0,
            next_level_name: MAX_LEVEL_NAME.to_string(),
        }
    }
}

/// All level definitions, sorted ascending by `min`.
///
/// Construction goes through `Config::rules`, which guarantees the table is
/// non-empty, starts at 0 and has no gaps or overlaps.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelTable {
    levels: Vec<LevelInfo>,
}

impl LevelTable {
    pub(crate) fn new(levels: Vec<LevelInfo>) -> Self {
        debug_assert!(!levels.is_empty());
        Self { levels }
    }

    /// Level for the given point total. Totals past the last range clamp to
    /// the highest level.
    pub fn lookup(&self, points: u32) -> &LevelInfo {
        self.levels
            .iter()
            .rev()
            .find(|l| points >= l.min)
            .unwrap_or(&self.levels[0])
    }

    /// Get a level definition by number
    pub fn get(&self, level: u32) -> Option<&LevelInfo> {
        self.levels.iter().find(|l| l.level == level)
    }

    /// The level a fresh player starts at
    pub fn first(&self) -> &LevelInfo {
        &self.levels[0]
    }

    /// Highest defined level
    pub fn highest(&self) -> &LevelInfo {
        &self.levels[self.levels.len() - 1]
    }

    pub fn iter(&self) -> impl Iterator<Item = &LevelInfo> {
        self.levels.iter()
    }

    /// Progress from `current_level` towards the next level.
    ///
    /// An unknown `current_level` is resolved from `points` instead.
    pub fn progress_to_next(&self, points: u32, current_level: u32) -> LevelProgress {
        let current = self
            .get(current_level)
            .unwrap_or_else(|| self.lookup(points));

        let Some(next) = self.get(current.level + 1) else {
            return LevelProgress::max_level();
        };

        let span = next.min.saturating_sub(current.min);
        let percent = if span == 0 {
            100.0
        } else {
            let into_level = f64::from(points) - f64::from(current.min);
            (into_level / f64::from(span) * 100.0).clamp(0.0, 100.0)
        };

        LevelProgress {
            percent,
            points_needed: next.min.saturating_sub(points),
            next_level_name: next.name.clone(),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_table() -> LevelTable {
    let level = |level, min, max, name: &str| LevelInfo {
        level,
        min,
        max,
        name: name.to_string(),
        emoji: "*".to_string(),
        color: "#000000".to_string(),
    };
    LevelTable::new(vec![
        level(1, 0, 100, "Novato"),
        level(2, 101, 300, "Explorador"),
        level(3, 301, 600, "Cazador"),
    ])
}
