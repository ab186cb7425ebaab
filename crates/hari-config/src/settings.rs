//! Runtime settings of the hari binary, read from `config.toml`.
//!
//! These never include the clock's appearance, which always starts from
//! the defaults and lives only in memory.

use std::{
    fs, io,
    path::{Path, PathBuf},
};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const SETTINGS_FILE: &str = "config.toml";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("Failed to determine config directory")]
    ConfigDirNotFound,
    #[error("Failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Runtime settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    /// Milliseconds between clock ticks.
    pub tick_ms: u64,
    /// When set, the current SVG is written here on every tick.
    pub svg_output: Option<PathBuf>,
    /// `tracing` filter directive used when `RUST_LOG` is not set.
    pub log_filter: String,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            tick_ms: 1000,
            svg_output: None,
            log_filter: "info".to_string(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs, SettingsError> {
    ProjectDirs::from("dev", "hari", "hari").ok_or(SettingsError::ConfigDirNotFound)
}

impl AppSettings {
    /// Location of the settings file.
    pub fn config_path() -> Result<PathBuf, SettingsError> {
        Ok(project_dirs()?.config_dir().join(SETTINGS_FILE))
    }

    /// Directory log files are written to.
    pub fn log_dir() -> Result<PathBuf, SettingsError> {
        Ok(project_dirs()?.data_local_dir().join("logs"))
    }

    /// Load from the default location, or defaults if there is no file.
    pub fn load() -> Result<Self, SettingsError> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load from `path`, or defaults if the file does not exist.
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "no settings file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(SettingsError::Io {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        toml::from_str(&contents).map_err(|source| SettingsError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
