//! Application configuration, read from YAML.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use vl_history::{DEFAULT_CAPACITY, HistoryStore};

use crate::error::{AppError, AppResult};

pub const DEFAULT_HISTORY_DIR: &str = ".virtual-lab/history";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Directory holding one history file per lab.
    pub history_dir: PathBuf,
    /// Snapshots kept per lab; the oldest are dropped first.
    pub history_capacity: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            history_dir: PathBuf::from(DEFAULT_HISTORY_DIR),
            history_capacity: DEFAULT_CAPACITY,
        }
    }
}

impl AppConfig {
    /// Read `path`. A file that does not exist yields the defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| AppError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_yaml(&content).map_err(|e| AppError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    /// Parse YAML text. Blank text and missing fields take the defaults.
    pub fn from_yaml(text: &str) -> Result<Self, serde_yaml::Error> {
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text)
    }

    pub fn history_store(&self) -> HistoryStore {
        HistoryStore::new(&self.history_dir)
    }
}
