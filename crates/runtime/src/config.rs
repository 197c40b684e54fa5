//! Configuration loading for embedders that keep warden settings in a RON
//! file alongside their other data files.

use std::fs;
use std::path::Path;

use warden_core::WardenConfig;

/// Errors produced while loading a configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config file: {0}")]
    Parse(String),
}

/// Loads a [`WardenConfig`] from a RON file.
///
/// Missing fields fall back to their defaults, so `()` is a valid
/// document.
pub fn load_config(path: &Path) -> Result<WardenConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    ron::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
}
