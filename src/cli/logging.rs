//! Tracing setup for the binary
//!
//! The interactive wizard owns the terminal, so log output goes to a file.

use std::fs::OpenOptions;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::io::paths::OnboardPaths;
use crate::Result;

/// Resolve the log file: explicit path, else the platform data directory
pub fn resolve_log_file(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    let paths = OnboardPaths::new().ok()?;
    paths.ensure_data_dir().ok()?;
    Some(paths.log_file())
}

/// Build the filter from the CLI level; RUST_LOG wins when set
pub fn build_filter(log_level: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to `log_file`.
/// Without a log file, logging stays disabled.
pub fn initialize_tracing(log_level: &str, log_file: Option<&Path>) -> Result<Option<PathBuf>> {
    let Some(path) = resolve_log_file(log_file) else {
        return Ok(None);
    };

    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(build_filter(log_level))
        .with_target(true)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to install tracing subscriber: {}", e))?;

    tracing::info!(log_file = %path.display(), "Logging initialized");
    Ok(Some(path))
}
