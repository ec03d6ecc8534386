use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::error::AppError;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct Config {
    #[serde(default)]
    pub(crate) url: Option<String>,
    #[serde(default)]
    pub(crate) data_file: Option<PathBuf>,
    #[serde(default)]
    pub(crate) timeout_secs: Option<u64>,
    #[serde(default)]
    pub(crate) insecure: bool,
    #[serde(default)]
    pub(crate) json: bool,
    #[serde(default)]
    pub(crate) timezone: Option<String>,
    #[serde(default)]
    pub(crate) locale: Option<String>,
}

impl Config {
    /// Load config from `explicit` if given, otherwise from the first default
    /// location that parses. A broken default file is skipped with a warning;
    /// a broken explicit file is an error.
    pub(crate) fn load(explicit: Option<&Path>) -> Result<Self, AppError> {
        if let Some(path) = explicit {
            return Self::load_from(path).map_err(|message| AppError::Config {
                path: path.to_path_buf(),
                message,
            });
        }

        for path in Self::get_config_paths() {
            if !path.exists() {
                continue;
            }
            match Self::load_from(&path) {
                Ok(config) => return Ok(config),
                Err(message) => warn!("Failed to parse {}: {}", path.display(), message),
            }
        }

        Ok(Self::default())
    }

    fn load_from(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path).map_err(|e| e.to_string())?;
        let config = toml::from_str::<Config>(&content).map_err(|e| e.to_string())?;
        debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    fn get_config_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();

        // 1. XDG config: ~/.config/zonecount/config.toml (Linux/cross-platform)
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".config").join("zonecount").join("config.toml"));
        }

        // 2. Platform config dir, e.g. ~/Library/Application Support/zonecount/config.toml
        if let Some(config_dir) = dirs::config_dir() {
            let platform_path = config_dir.join("zonecount").join("config.toml");
            if !paths.contains(&platform_path) {
                paths.push(platform_path);
            }
        }

        // 3. Home directory: ~/.zonecount.toml
        if let Some(home) = dirs::home_dir() {
            paths.push(home.join(".zonecount.toml"));
        }

        paths
    }
}
