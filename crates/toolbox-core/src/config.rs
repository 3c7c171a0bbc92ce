//! Configuration loading: YAML file, then environment overrides

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable overriding the output directory
pub const OUTPUT_DIR_ENV: &str = "TOOLBOX_OUTPUT_DIR";
/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "TOOLBOX_LOG_LEVEL";
/// Environment variable overriding the log file
pub const LOG_FILE_ENV: &str = "TOOLBOX_LOG_FILE";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error", "off"];

/// Session configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Root under which tools are generated (`<root>/<type>/<name>`)
    pub output_dir: PathBuf,

    /// Diagnostic level: trace, debug, info, warn, error or off
    pub log_level: String,

    /// Diagnostics destination. No logging when unset, since the
    /// terminal belongs to the UI.
    pub log_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("cmd"),
            log_level: "info".to_string(),
            log_file: None,
        }
    }
}

impl Config {
    /// Parse YAML; `path` is only used in error messages
    pub fn from_yaml_str(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty document deserializes as unit, not as a map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an explicit file, or the first default location that exists.
    ///
    /// Missing default files mean defaults; an explicit file must be readable.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(path) => path.to_path_buf(),
            None => match default_locations().into_iter().find(|p| p.is_file()) {
                Some(path) => path,
                None => return Ok(Self::default()),
            },
        };

        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_yaml_str(&content, &path)
    }

    /// Apply `TOOLBOX_*` overrides using `lookup` (normally `std::env::var`)
    pub fn apply_env<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(dir) = lookup(OUTPUT_DIR_ENV).filter(|v| !v.is_empty()) {
            self.output_dir = PathBuf::from(dir);
        }
        if let Some(level) = lookup(LOG_LEVEL_ENV).filter(|v| !v.is_empty()) {
            self.log_level = level;
        }
        if let Some(file) = lookup(LOG_FILE_ENV).filter(|v| !v.is_empty()) {
            self.log_file = Some(PathBuf::from(file));
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let level = self.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&level.as_str()) {
            return Err(ConfigError::InvalidLogLevel {
                value: self.log_level.clone(),
            });
        }
        Ok(())
    }
}

/// Default search order: `./configs/toolbox.yaml`, `<config dir>/toolbox/config.yaml`, `./toolbox.yaml`
pub fn default_locations() -> Vec<PathBuf> {
    let mut locations = vec![PathBuf::from("configs").join("toolbox.yaml")];
    if let Some(dir) = dirs::config_dir() {
        locations.push(dir.join("toolbox").join("config.yaml"));
    }
    locations.push(PathBuf::from("toolbox.yaml"));
    locations
}
