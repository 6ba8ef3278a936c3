use crate::error::{Result, TomtomError};
use crate::render::DateZone;
use crate::service::Application;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Overrides the directory `config.json` is read from.
pub const CONFIG_DIR_ENV: &str = "TOMTOM_CONFIG_DIR";

/// User configuration, stored in `<config dir>/config.json`
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TomtomConfig {
    /// Note application queried when an action is not given `--gnote`
    #[serde(default)]
    pub application: Application,

    /// Time zone for the dates shown by `list`
    #[serde(default)]
    pub dates: DateZone,
}

impl TomtomConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TomtomError::Io)?;
        let config: TomtomConfig =
            serde_json::from_str(&content).map_err(TomtomError::Serialization)?;
        Ok(config)
    }
}

/// `$TOMTOM_CONFIG_DIR` if set, else the platform config directory.
pub fn config_dir() -> Option<PathBuf> {
    if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
        return Some(PathBuf::from(dir));
    }
    ProjectDirs::from("org", "tomtom", "tomtom").map(|dirs| dirs.config_dir().to_path_buf())
}
