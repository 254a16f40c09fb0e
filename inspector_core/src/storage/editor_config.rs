// inspector_core/src/storage/editor_config.rs
use crate::inspector::EditCollapse;
use ron::ser::{PrettyConfig, to_string_pretty};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use directories_next::ProjectDirs;
use thiserror::Error;
use std::fs;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not resolve the app directory")]
    NoAppDir,
    #[error("config io: {0}")]
    Io(#[from] std::io::Error),
    #[error("config could not be parsed: {0}")]
    Parse(#[from] ron::error::SpannedError),
    #[error("config could not be written: {0}")]
    Write(#[from] ron::Error),
}

/// Settings of the inspector and its history.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InspectorConfig {
    /// `flexi_logger` spec, e.g. `"info"` or `"inspector_core=debug"`.
    pub log_level: String,
    pub log_to_file: bool,
    /// Oldest history entries are dropped past this many. `None` keeps everything.
    pub history_limit: Option<usize>,
    pub collapse: EditCollapse,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: true,
            history_limit: None,
            collapse: EditCollapse::LastWins,
        }
    }
}

/// Returns the app_dir for the program.
pub fn app_dir() -> Result<PathBuf, ConfigError> {
    ProjectDirs::from("com", "inspector", "editor")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoAppDir)
}

pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(app_dir()?.join("inspector_config.ron"))
}

/// Where a loaded config came from. Returned alongside the config so the
/// outcome can be logged once a logger is running.
#[derive(Debug)]
pub enum ConfigSource {
    File(PathBuf),
    /// Nothing stored yet, defaults were used.
    Missing(PathBuf),
    /// The file or the app dir was unusable, defaults were used.
    Failed(ConfigError),
}

impl ConfigSource {
    pub fn log(&self) {
        match self {
            ConfigSource::File(path) => log::info!("Loaded config from {}.", path.display()),
            ConfigSource::Missing(path) => {
                log::info!("No config at {}, using defaults.", path.display())
            }
            ConfigSource::Failed(e) => log::error!("Error loading config: {e}. Using defaults."),
        }
    }
}

/// Loads the config from the app dir, falling back to defaults when it is
/// missing or invalid.
pub fn load_config() -> (InspectorConfig, ConfigSource) {
    match config_path() {
        Ok(path) => load_config_from(&path),
        Err(e) => (InspectorConfig::default(), ConfigSource::Failed(e)),
    }
}

/// Loads the config at `path`, falling back to defaults.
pub fn load_config_from(path: &Path) -> (InspectorConfig, ConfigSource) {
    match read_config(path) {
        Ok(config) => (config, ConfigSource::File(path.to_path_buf())),
        Err(ConfigError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
            (InspectorConfig::default(), ConfigSource::Missing(path.to_path_buf()))
        }
        Err(e) => (InspectorConfig::default(), ConfigSource::Failed(e)),
    }
}

pub fn read_config(path: &Path) -> Result<InspectorConfig, ConfigError> {
    let txt = fs::read_to_string(path)?;
    Ok(ron::from_str(&txt)?)
}

/// Saves the config .ron file to the app dir.
pub fn save_config(config: &InspectorConfig) -> Result<(), ConfigError> {
    save_config_to(config, &config_path()?)
}

pub fn save_config_to(config: &InspectorConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let ron = to_string_pretty(config, PrettyConfig::default())?;
    fs::write(path, ron)?;
    Ok(())
}
