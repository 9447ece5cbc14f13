//! Configuration file handling.
//!
//! This module provides loading and parsing of `.vm_cli.json` configuration files.
//! The file is optional; when it is absent every setting falls back to its default.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Name of the configuration file looked up in the current directory.
pub const CONFIG_FILE_NAME: &str = ".vm_cli.json";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Top-level configuration file structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConfigFile {
    /// Subscription used to synthesize resource IDs from short names
    #[serde(default)]
    pub subscription_id: Option<String>,

    /// Values applied to arguments the user left out
    #[serde(default)]
    pub defaults: Defaults,
}

/// Per-argument defaults.
///
/// JSON format:
///
/// ```json
/// { "defaults": { "resource_group": "my-group" } }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Used wherever a command needs a resource group and none was given
    #[serde(default)]
    pub resource_group: Option<String>,
}

impl ConfigFile {
    /// Load configuration from `.vm_cli.json` in the current directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or is not valid JSON.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(Path::new(CONFIG_FILE_NAME))
    }

    /// Load configuration from an explicit path.
    ///
    /// A missing file yields the default configuration.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "no configuration file, using defaults");
                return Ok(Self::default());
            }
            Err(source) => {
                return Err(ConfigError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        };

        serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}
