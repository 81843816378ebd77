use std::fs;
use std::path::Path;

use crate::models::Config;

use anyhow::{Context, Result};
use colored::Colorize;

/// Loads the config file. A missing file yields the defaults; an unreadable
/// one also does, with a warning.
pub fn load_config(path: &Path) -> Config {
    let Ok(data) = fs::read_to_string(path) else {
        return Config::default();
    };

    serde_json::from_str(&data).unwrap_or_else(|e| {
        eprintln!(
            "{} ignoring invalid config {}: {e}",
            "Warning:".yellow(),
            path.display()
        );
        Config::default()
    })
}

pub fn save_config(path: &Path, config: &Config) -> Result<()> {
    let data = serde_json::to_string_pretty(config)?;
    fs::write(path, data).with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
