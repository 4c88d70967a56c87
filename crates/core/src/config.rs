use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::probe::{built_for_simulator, SIMULATOR_MODEL_IDENTIFIER};

/// Error type for loading a probe configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read probe config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse probe config JSON at {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Runtime configuration for choosing an identifier source.
///
/// Serialized as JSON, e.g.
/// `{ "simulated": true, "simulator_variable": "SIMULATOR_MODEL_IDENTIFIER" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProbeConfig {
    /// Force the simulator (`true`) or native (`false`) source.
    /// `None` keeps the choice made by the compilation target.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub simulated: Option<bool>,
    /// Environment variable holding the simulated model identifier.
    #[serde(default = "default_simulator_variable")]
    pub simulator_variable: String,
}

fn default_simulator_variable() -> String {
    SIMULATOR_MODEL_IDENTIFIER.to_string()
}

impl Default for ProbeConfig {
    fn default() -> Self {
        Self { simulated: None, simulator_variable: default_simulator_variable() }
    }
}

impl ProbeConfig {
    /// Whether the simulator source should be used.
    pub fn is_simulated(&self) -> bool {
        self.simulated.unwrap_or_else(built_for_simulator)
    }

    /// Load a config from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        serde_json::from_str(&json)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })
    }
}
