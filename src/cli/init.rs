//! Init command implementation

use anyhow::{bail, Result};

use dondeconsigo::config::Config;

use super::Paths;

/// Write the built-in configuration table so it can be edited
pub fn init_command(paths: &Paths, force: bool) -> Result<()> {
    let config_path = paths.config_path();

    if config_path.exists() && !force {
        bail!(
            "Configuration already exists: {}\nUse --force to overwrite.",
            config_path.display()
        );
    }

    Config::with_defaults().save_to_file(&config_path)?;
    println!("Created: {}", config_path.display());

    Ok(())
}
