//! Configuration validation

use std::collections::HashMap;
use std::time::Duration;

use super::Config;
use crate::gamification::{
    ActionKind, BadgeCatalog, LevelTable, PointsTable, QueueTiming, Rules,
};

/// Error type for invalid configuration tables
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Unknown action key: {0}")]
    UnknownAction(String),

    #[error("Level table is empty")]
    EmptyLevelTable,

    #[error("First level must start at 0 points, starts at {0}")]
    FirstLevelNotZero(u32),

    #[error("Level {level} has min {min} above max {max}")]
    InvertedRange { level: u32, min: u32, max: u32 },

    #[error("Level {level} starts at {min}, expected {expected} (ranges must be contiguous)")]
    LevelGap { level: u32, min: u32, expected: u32 },

    #[error("Levels must be numbered 1, 2, 3...: expected {expected}, found {found}")]
    LevelNumbering { expected: u32, found: u32 },

    #[error("Toast display duration must be greater than zero")]
    ZeroDisplayDuration,
}

impl Config {
    /// Validate the table and build the run-time rules
    pub fn rules(&self) -> Result<Rules, ConfigError> {
        let mut points = HashMap::new();
        for (key, value) in &self.actions {
            let kind = ActionKind::from_str(key)
                .ok_or_else(|| ConfigError::UnknownAction(key.clone()))?;
            points.insert(kind, *value);
        }

        self.validate_levels()?;

        if self.queue.display_ms == 0 {
            return Err(ConfigError::ZeroDisplayDuration);
        }

        Ok(Rules {
            points: PointsTable::new(points),
            levels: LevelTable::new(self.levels.clone()),
            badges: BadgeCatalog::new(self.badges.clone()),
            queue: QueueTiming {
                display: Duration::from_millis(self.queue.display_ms),
                settle: Duration::from_millis(self.queue.settle_ms),
            },
        })
    }

    fn validate_levels(&self) -> Result<(), ConfigError> {
        let first = self.levels.first().ok_or(ConfigError::EmptyLevelTable)?;
        if first.min != 0 {
            return Err(ConfigError::FirstLevelNotZero(first.min));
        }

        let mut expected_min = 0u32;
        for (i, level) in self.levels.iter().enumerate() {
            let expected_level = i as u32 + 1;
            if level.level != expected_level {
                return Err(ConfigError::LevelNumbering {
                    expected: expected_level,
                    found: level.level,
                });
            }
            if level.min > level.max {
                return Err(ConfigError::InvertedRange {
                    level: level.level,
                    min: level.min,
                    max: level.max,
                });
            }
            if level.min != expected_min {
                return Err(ConfigError::LevelGap {
                    level: level.level,
                    min: level.min,
                    expected: expected_min,
                });
            }
            expected_min = level.max.saturating_add(1);
        }

        Ok(())
    }
}
