//! Configuration file I/O operations

use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;

use super::Config;

/// Written above the serialized table by `dondeconsigo init`
const CONFIG_HEADER: &str = "\
# Dónde Consigo - gamification table
#
# [actions]      points per action key (dailyLogin, sharePromo, ...)
# [[levels]]     contiguous point ranges, first one starting at 0
# [badges.<id>]  display name and description
# [queue]        toast display_ms and settle_ms

";

impl Config {
    /// Get the global config directory path (~/.dondeconsigo/)
    pub fn global_config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".dondeconsigo")
    }

    /// Get the global config file path (~/.dondeconsigo/config.toml)
    pub fn global_config_path() -> PathBuf {
        Self::global_config_dir().join("config.toml")
    }

    /// Write the table to `path` with a commented header
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let table = toml::to_string_pretty(self).context("Failed to serialize config")?;
        write_locked(path, &format!("{}{}", CONFIG_HEADER, table))
    }
}

/// Replace `path` via temp file + rename while holding `<path>.lock`
fn write_locked(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create config directory: {}", parent.display()))?;
    }

    let lock_path = path.with_extension("toml.lock");
    let lock = OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .open(&lock_path)
        .with_context(|| format!("Failed to create lock file: {}", lock_path.display()))?;
    lock.lock_exclusive().context("Failed to acquire config lock")?;

    let temp_path = path.with_extension("toml.tmp");
    let mut temp = File::create(&temp_path)
        .with_context(|| format!("Failed to create temp file: {}", temp_path.display()))?;
    temp.write_all(content.as_bytes())
        .and_then(|()| temp.sync_all())
        .with_context(|| format!("Failed to write {}", temp_path.display()))?;

    std::fs::rename(&temp_path, path)
        .with_context(|| format!("Failed to replace config file: {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_then_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("conf/config.toml");

        let mut config = Config::with_defaults();
        config.queue.settle_ms = 500;
        config.save_to_file(&path).unwrap();

        let loaded = Config::from_file(&path).unwrap();
        assert_eq!(loaded, config);
        assert!(!path.with_extension("toml.tmp").exists());
    }

    #[test]
    fn test_saved_file_starts_with_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        Config::with_defaults().save_to_file(&path).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("# Dónde Consigo"));
        assert!(content.contains("[queue]"));
    }

    #[test]
    fn test_save_replaces_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "not = [valid").unwrap();

        Config::with_defaults().save_to_file(&path).unwrap();
        assert_eq!(Config::from_file(&path).unwrap(), Config::with_defaults());
    }
}
