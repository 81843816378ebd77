use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, anyhow};
use etcetera::app_strategy::{AppStrategy, AppStrategyArgs};

#[cfg(target_os = "windows")]
use etcetera::app_strategy::Windows as Platform;
#[cfg(not(target_os = "windows"))]
use etcetera::app_strategy::Xdg as Platform;

const APP_NAME: &str = "ytlaunch";

/// Overrides the platform config directory.
pub const CONFIG_DIR_ENV: &str = "YTLAUNCH_CONFIG_DIR";

/// Where ytlaunch keeps its files.
pub struct AppPaths {
    pub config_file: PathBuf,
}

impl AppPaths {
    /// `$YTLAUNCH_CONFIG_DIR` if set, else `~/.config/ytlaunch` (AppData on Windows).
    pub fn init() -> Result<Self> {
        let dir = match env::var_os(CONFIG_DIR_ENV) {
            Some(dir) if !dir.is_empty() => PathBuf::from(dir),
            _ => platform_config_dir()?,
        };
        Self::in_dir(&dir)
    }

    /// Uses `dir` as the config directory, creating it if needed.
    pub fn in_dir(dir: &Path) -> Result<Self> {
        fs::create_dir_all(dir)
            .with_context(|| format!("failed to create config dir: {}", dir.display()))?;

        Ok(Self {
            config_file: dir.join("config.json"),
        })
    }
}

fn platform_config_dir() -> Result<PathBuf> {
    let platform = Platform::new(AppStrategyArgs {
        top_level_domain: "com".to_string(),
        author: APP_NAME.to_string(),
        app_name: APP_NAME.to_string(),
    })
    .map_err(|_| anyhow!("could not determine the config directory"))?;

    Ok(platform.config_dir())
}
