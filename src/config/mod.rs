//! Configuration loading and management
//!
//! The configuration is a static table read once at start-up: action prices,
//! the level table, the badge catalog and toast timing. [`Config::rules`]
//! validates it into the run-time [`Rules`](crate::gamification::Rules).

mod defaults;
mod io;
mod rules;

pub use defaults::DEFAULT_RULES;
pub use rules::ConfigError;

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::gamification::{BadgeDef, LevelInfo};

/// Main configuration structure.
///
/// Sections missing from a file keep their built-in values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Action key -> points
    pub actions: BTreeMap<String, u32>,

    /// Level table, ascending by `min`
    pub levels: Vec<LevelInfo>,

    /// Badge id -> display metadata
    pub badges: BTreeMap<String, BadgeDef>,

    /// Toast timing
    pub queue: QueueSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct QueueSettings {
    /// How long an achievement stays on screen
    pub display_ms: u64,
    /// Exit transition before the next one shows
    pub settle_ms: u64,
}

impl Default for QueueSettings {
    fn default() -> Self {
        Self {
            display_ms: 3000,
            settle_ms: 300,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl Config {
    /// Load configuration from a file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Config = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(config)
    }

    /// Load from `path`, or the global config file when `None`. A missing
    /// file yields the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let global_path = Self::global_config_path();
        let path = path.unwrap_or(&global_path);

        if !path.exists() {
            tracing::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::with_defaults());
        }

        Self::from_file(path)
    }
}
