use crate::utils::error::{PlacelogError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Optional TOML config file supplying defaults for flags the user did not
/// pass on the command line.
///
/// ```toml
/// [storage]
/// data_dir = "/home/traveler/.placelog"
///
/// [defaults]
/// department = "Aerospace Division"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FileConfig {
    pub storage: Option<StorageConfig>,
    pub defaults: Option<DefaultsConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    pub data_dir: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefaultsConfig {
    pub department: Option<String>,
}

impl FileConfig {
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| PlacelogError::ConfigError {
            message: format!("failed to parse {}: {}", path.display(), e),
        })
    }

    pub fn data_dir(&self) -> Option<&str> {
        self.storage.as_ref().and_then(|s| s.data_dir.as_deref())
    }

    pub fn department(&self) -> Option<&str> {
        self.defaults.as_ref().and_then(|d| d.department.as_deref())
    }
}
