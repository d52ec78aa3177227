//! Optional JSON configuration file
//!
//! ```json
//! { "settings": { "muted": true }, "tuning": { "asteroid_speed": 6 } }
//! ```
//!
//! Every field has a default, so a partial file (or none at all) is fine.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::settings::Settings;
use crate::tuning::Tuning;

/// Where the game looks for its config, relative to the working directory
pub const CONFIG_PATH: &str = "./casteroids.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("{0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub settings: Settings,
    pub tuning: Tuning,
}

impl GameConfig {
    /// Parse and validate a config document
    pub fn from_json(json: &str, path: &Path) -> Result<Self, ConfigError> {
        let config: GameConfig =
            serde_json::from_str(json).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        config.tuning.validate()?;
        Ok(Self {
            settings: config.settings.sanitized(),
            tuning: config.tuning,
        })
    }

    /// Load the config file, falling back to defaults if it does not exist.
    /// A file that exists but is unreadable or invalid is an error.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        match std::fs::read_to_string(path) {
            Ok(json) => {
                let config = Self::from_json(&json, path)?;
                log::info!("Loaded config from {}", path.display());
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No config at {}, using defaults", path.display());
                Ok(Self::default())
            }
            Err(source) => Err(ConfigError::Io {
                path: path.to_path_buf(),
                source,
            }),
        }
    }
}
