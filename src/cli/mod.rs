//! CLI command implementations

pub mod award;
pub mod demo;
pub mod init;
pub mod login;
pub mod status;

use std::path::PathBuf;

use anyhow::{Context, Result};

use dondeconsigo::config::Config;
use dondeconsigo::store::SqliteStorage;
use dondeconsigo::{Achievement, GamificationManager, Rules, Saved};

/// Config and database locations from the global flags
pub struct Paths {
    pub config: Option<PathBuf>,
    pub db: Option<PathBuf>,
}

impl Paths {
    pub fn config_path(&self) -> PathBuf {
        self.config.clone().unwrap_or_else(Config::global_config_path)
    }

    pub fn db_path(&self) -> PathBuf {
        self.db
            .clone()
            .unwrap_or_else(|| Config::global_config_dir().join("gamification.db"))
    }
}

/// Load and validate the configuration table
pub fn load_rules(paths: &Paths) -> Result<Rules> {
    let config = Config::load(paths.config.as_deref())?;
    let rules = config
        .rules()
        .with_context(|| format!("Invalid config: {}", paths.config_path().display()))?;
    Ok(rules)
}

/// Open the state database and load `user`
pub fn open_manager(paths: &Paths, user: &str) -> Result<GamificationManager<SqliteStorage>> {
    let rules = load_rules(paths)?;
    let db_path = paths.db_path();
    let storage = SqliteStorage::open(&db_path)
        .with_context(|| format!("Failed to open state db: {}", db_path.display()))?;
    Ok(GamificationManager::new(rules, storage, user))
}

pub fn print_events(events: &[Achievement]) {
    for event in events {
        println!("  {}", event.message);
    }
}

pub fn report_save(saved: &Saved) {
    if let Saved::Failed(e) = saved {
        eprintln!("Warning: progress not saved ({}). It will be retried on the next change.", e);
    }
}
