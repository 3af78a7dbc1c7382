//! Configuration handling for the entry form

use anyhow::Result;
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Environment variable overriding `submissions_file`
pub const SUBMISSIONS_FILE_ENV: &str = "SPIDR_SUBMISSIONS_FILE";

/// User configuration for the entry form
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct EntryConfig {
    /// Append submissions to this JSON-lines file instead of the log
    pub submissions_file: Option<PathBuf>,
    /// Start with the PIN unmasked
    pub show_pin: Option<bool>,
    /// Where diagnostic logs are written
    pub log_file: Option<PathBuf>,
}

impl EntryConfig {
    fn project_dirs() -> Option<ProjectDirs> {
        ProjectDirs::from("design", "spidr", "spidr-entry")
    }

    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        Self::project_dirs().map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from file
    pub fn load() -> Result<Self> {
        let path = Self::config_path();

        if let Some(path) = path {
            if path.exists() {
                let content = fs::read_to_string(&path)?;
                let config: EntryConfig = serde_json::from_str(&content)?;
                return Ok(config);
            }
        }

        Ok(Self::default())
    }

    /// Submissions file, with the environment taking precedence over the file
    pub fn submissions_file(&self) -> Option<PathBuf> {
        Self::resolve_submissions_file(
            std::env::var_os(SUBMISSIONS_FILE_ENV).map(PathBuf::from),
            self.submissions_file.clone(),
        )
    }

    fn resolve_submissions_file(
        from_env: Option<PathBuf>,
        from_file: Option<PathBuf>,
    ) -> Option<PathBuf> {
        from_env
            .filter(|p| !p.as_os_str().is_empty())
            .or(from_file)
    }

    pub fn show_pin(&self) -> bool {
        self.show_pin.unwrap_or(false)
    }

    /// Log file path: configured value, else the platform data directory
    pub fn log_file(&self) -> Option<PathBuf> {
        self.log_file.clone().or_else(|| {
            Self::project_dirs().map(|dirs| dirs.data_local_dir().join("spidr-entry.log"))
        })
    }
}
