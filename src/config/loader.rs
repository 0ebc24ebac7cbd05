use super::types::OnboardConfig;
use crate::io::paths::OnboardPaths;
use crate::{OnboardError, Result};
use std::collections::HashSet;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// Where a loaded configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Explicit path given on the command line
    Explicit(PathBuf),
    /// onboard.yaml in the user's config directory
    User(PathBuf),
    /// Nothing on disk, built-in defaults
    Defaults,
}

impl std::fmt::Display for ConfigSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigSource::Explicit(path) | ConfigSource::User(path) => {
                write!(f, "{}", path.display())
            }
            ConfigSource::Defaults => write!(f, "built-in defaults"),
        }
    }
}

/// Configuration loader for onboard.yaml
pub struct ConfigLoader {
    /// Fallback file checked when no explicit path is given
    user_config: Option<PathBuf>,
}

impl ConfigLoader {
    /// Create a loader that falls back to the platform config directory
    pub fn new() -> Self {
        Self {
            user_config: OnboardPaths::new().ok().map(|paths| paths.config_file()),
        }
    }

    /// Create a loader with a specific fallback file (or none)
    pub fn with_user_config(user_config: Option<PathBuf>) -> Self {
        Self { user_config }
    }

    /// Resolve and load the configuration
    pub fn load(&self, explicit: Option<&Path>) -> Result<(OnboardConfig, ConfigSource)> {
        if let Some(path) = explicit {
            let config = Self::load_file(path)?;
            return Ok((config, ConfigSource::Explicit(path.to_path_buf())));
        }

        if let Some(path) = &self.user_config {
            if path.exists() {
                let config = Self::load_file(path)?;
                return Ok((config, ConfigSource::User(path.clone())));
            }
            debug!("No user config at {}", path.display());
        }

        let config = OnboardConfig::default();
        validate(&config)?;
        Ok((config, ConfigSource::Defaults))
    }

    /// Load and validate a single configuration file
    pub fn load_file(path: &Path) -> Result<OnboardConfig> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            OnboardError::Config(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config = Self::parse(&contents).map_err(|e| match e {
            OnboardError::Yaml(err) => OnboardError::Config(format!(
                "Failed to parse config file {}: {}",
                path.display(),
                err
            )),
            other => other,
        })?;

        info!(path = %path.display(), themes = config.themes.len(), "Loaded configuration");
        Ok(config)
    }

    /// Parse and validate configuration from a YAML string
    pub fn parse(contents: &str) -> Result<OnboardConfig> {
        let config: OnboardConfig = if contents.trim().is_empty() {
            OnboardConfig::default()
        } else {
            serde_yaml_ng::from_str(contents)?
        };
        validate(&config)?;
        Ok(config)
    }
}

impl Default for ConfigLoader {
    fn default() -> Self {
        Self::new()
    }
}

/// Validate configuration content
pub fn validate(config: &OnboardConfig) -> Result<()> {
    if config.brand.trim().is_empty() {
        return Err(OnboardError::Config("Brand name must not be empty".to_string()));
    }

    if config.themes.is_empty() {
        return Err(OnboardError::Config(
            "At least one theme must be configured".to_string(),
        ));
    }

    let mut seen = HashSet::new();
    for (index, theme) in config.themes.iter().enumerate() {
        if theme.id.trim().is_empty() {
            return Err(OnboardError::Config(format!(
                "Theme at index {} has empty id",
                index
            )));
        }
        if !seen.insert(theme.id.as_str()) {
            return Err(OnboardError::Config(format!(
                "Duplicate theme id '{}'",
                theme.id
            )));
        }
    }

    if config.product_types.is_empty() {
        return Err(OnboardError::Config(
            "product_types must list at least one option".to_string(),
        ));
    }

    if config.product_categories.is_empty() {
        return Err(OnboardError::Config(
            "product_categories must list at least one option".to_string(),
        ));
    }

    if config.validation.description_max == 0 {
        return Err(OnboardError::Config(
            "validation.description_max must be greater than zero".to_string(),
        ));
    }

    Ok(())
}
