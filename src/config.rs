use log::{LevelFilter, warn};
use serde::Deserialize;
use std::{fs::read_to_string, path::Path};

#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    pub log_level: LevelFilter,
    pub show_grid_each_step: bool,
}

impl Default for GlobalConfig {
    fn default() -> Self {
        GlobalConfig {
            log_level: LevelFilter::Info,
            show_grid_each_step: true,
        }
    }
}

impl GlobalConfig {
    /// Reads `config.toml` from the user's config directory, falling back to
    /// the defaults when the file is missing or malformed.
    pub fn load() -> Self {
        let Some(dir) = dirs::config_dir() else {
            return GlobalConfig::default();
        };
        let path = dir.join("bimaru").join("config.toml");
        if !path.exists() {
            return GlobalConfig::default();
        }
        match GlobalConfig::from_file(&path) {
            Ok(config) => config,
            Err(e) => {
                warn!("Failed to load {}: {e}, using defaults", path.to_string_lossy());
                GlobalConfig::default()
            },
        }
    }

    fn from_file(path: &Path) -> crate::error::Result<Self> {
        let text = read_to_string(path)?;
        Ok(toml::from_str(&text)?)
    }
}
