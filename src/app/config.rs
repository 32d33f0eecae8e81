//! Application configuration
//!
//! Settings come from a TOML file, read only by the commands that use it. An
//! explicit `--config` path must exist; otherwise the platform config
//! directory is consulted and defaults are used when no file is present there.

use crate::error::{MonoidalError, Result};
use crate::laws::LawConfig;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

const CONFIG_FILE_NAME: &str = "config.toml";

/// Contents of the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    pub laws: LawConfig,
}

/// Application configuration structure
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    /// Verbosity level for logging
    pub verbose: u8,
    /// Explicit configuration file given on the command line
    pub config_path: Option<PathBuf>,
}

impl AppConfig {
    pub fn new(verbose: u8) -> Self {
        Self {
            verbose,
            config_path: None,
        }
    }

    pub fn with_config_path(mut self, path: Option<PathBuf>) -> Self {
        self.config_path = path;
        self
    }

    /// Read file settings from the explicit path, or from the default
    /// location when none was given.
    pub fn load_file(&self) -> Result<FileConfig> {
        match &self.config_path {
            Some(path) => load_file_config(path),
            None => match default_config_path() {
                Some(path) if path.exists() => load_file_config(&path),
                _ => {
                    debug!("No configuration file found, using defaults");
                    Ok(FileConfig::default())
                }
            },
        }
    }

    /// Get the log level string based on verbosity
    pub fn log_level(&self) -> &'static str {
        match self.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    }
}

/// Path of the configuration file in the platform config directory.
pub fn default_config_path() -> Option<PathBuf> {
    ProjectDirs::from("com", "monoidal", "monoidal")
        .map(|dirs| dirs.config_dir().join(CONFIG_FILE_NAME))
}

/// Read and parse a configuration file.
pub fn load_file_config(path: &Path) -> Result<FileConfig> {
    if !path.exists() {
        return Err(MonoidalError::Config(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }
    let contents = std::fs::read_to_string(path)?;
    let config: FileConfig = toml::from_str(&contents)?;
    debug!("Loaded configuration from {}", path.display());
    Ok(config)
}
