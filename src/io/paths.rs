use crate::{OnboardError, Result};
use directories::ProjectDirs;
use std::path::{Path, PathBuf};

const CONFIG_FILE_NAME: &str = "onboard.yaml";
const LOG_FILE_NAME: &str = "onboard.log";

/// Path management for onboarding configuration and logs
#[derive(Debug, Clone)]
pub struct OnboardPaths {
    /// Configuration directory (holds onboard.yaml)
    pub config_dir: PathBuf,
    /// Data directory (holds onboard.log)
    pub data_dir: PathBuf,
}

impl OnboardPaths {
    /// Create new paths instance using standard directories
    pub fn new() -> Result<Self> {
        let dirs = ProjectDirs::from("", "", "cloudnix-onboard").ok_or_else(|| {
            OnboardError::Path("Failed to determine project directories".to_string())
        })?;

        Ok(Self {
            config_dir: dirs.config_dir().to_path_buf(),
            data_dir: dirs.data_local_dir().to_path_buf(),
        })
    }

    /// Create paths rooted at a specific directory
    pub fn for_dir(root: &Path) -> Self {
        Self {
            config_dir: root.to_path_buf(),
            data_dir: root.join("data"),
        }
    }

    /// Default configuration file path
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE_NAME)
    }

    /// Default log file path
    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE_NAME)
    }

    /// Ensure the data directory exists so the log file can be created
    pub fn ensure_data_dir(&self) -> Result<()> {
        std::fs::create_dir_all(&self.data_dir)?;
        Ok(())
    }
}
