use crate::config::{FileConfig, Settings};
use crate::utils::error::Result;
use clap::Args;
use std::path::PathBuf;

/// Global CLI flags shared by every subcommand.
#[derive(Debug, Clone, Args)]
pub struct CliConfig {
    /// Directory holding the record store
    #[arg(long, global = true)]
    pub data_dir: Option<String>,

    /// Optional TOML config file
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Organizational label stamped onto new places
    #[arg(long, global = true)]
    pub department: Option<String>,

    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

impl CliConfig {
    /// Merges flags, the optional config file and built-in defaults.
    pub fn resolve(&self) -> Result<Settings> {
        let file = match &self.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };

        let mut settings = Settings::default();
        if let Some(data_dir) = file.data_dir() {
            settings.data_dir = data_dir.to_string();
        }
        if let Some(department) = file.department() {
            settings.department = department.to_string();
        }
        if let Some(data_dir) = &self.data_dir {
            settings.data_dir = data_dir.clone();
        }
        if let Some(department) = &self.department {
            settings.department = department.clone();
        }
        Ok(settings)
    }
}
