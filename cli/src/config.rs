//! Config file loading for thots.
//!
//! `~/.thots/config.toml`, everything optional:
//!
//! ```toml
//! [practice]
//! hot_probability = 0.7
//! seed = 42
//! ```

use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

use thots_types::HotProbability;

#[derive(Debug, Default, Deserialize)]
pub struct ThotsConfig {
    pub practice: Option<PracticeConfig>,
}

#[derive(Debug, Default, Deserialize)]
pub struct PracticeConfig {
    /// Chance that a round's ZIP is hot. Values outside [0, 1] are a parse
    /// error, not a clamp.
    pub hot_probability: Option<HotProbability>,
    /// Fixed seed for a reproducible session. `THOTS_SEED` overrides it.
    pub seed: Option<u64>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config at {}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config at {}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl ThotsConfig {
    /// Loads the config file. `Ok(None)` when there is no file; errors are
    /// also warned about here so callers can fall back to defaults silently.
    pub fn load() -> Result<Option<Self>, ConfigError> {
        let Some(path) = config_path() else {
            return Ok(None);
        };
        Self::load_from(&path)
    }

    fn load_from(path: &Path) -> Result<Option<Self>, ConfigError> {
        if !path.exists() {
            return Ok(None);
        }

        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                tracing::warn!("Failed to read config at {:?}: {}", path, err);
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source: err,
                });
            }
        };

        match toml::from_str(&content) {
            Ok(config) => Ok(Some(config)),
            Err(err) => {
                tracing::warn!("Failed to parse config at {:?}: {}", path, err);
                Err(ConfigError::Parse {
                    path: path.to_path_buf(),
                    source: err,
                })
            }
        }
    }

    /// The expected config file location.
    pub fn path() -> Option<PathBuf> {
        config_path()
    }
}

fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".thots").join("config.toml"))
}
