#[cfg(feature = "cli")]
pub mod cli;
pub mod file;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use file::FileConfig;

use crate::core::ConfigProvider;
use crate::domain::presets::DEFAULT_DEPARTMENT;
use crate::utils::error::Result;
use crate::utils::validation::{validate_required_text, Validate};

pub const DEFAULT_DATA_DIR: &str = "./placelog-data";

/// Fully resolved runtime settings: CLI flags win over config-file values,
/// which win over built-in defaults.
#[derive(Debug, Clone)]
pub struct Settings {
    pub data_dir: String,
    pub department: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: DEFAULT_DATA_DIR.to_string(),
            department: DEFAULT_DEPARTMENT.to_string(),
        }
    }
}

impl ConfigProvider for Settings {
    fn data_dir(&self) -> &str {
        &self.data_dir
    }

    fn department(&self) -> &str {
        &self.department
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_required_text("data_dir", &self.data_dir)?;
        validate_required_text("department", &self.department)?;
        Ok(())
    }
}
