//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::CONFIG_DIR_NAME;
use super::types::AppConfig;
use std::path::{Path, PathBuf};

/// Standard config file names to search for.
const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-utility.yaml",
    ".sbom-utility.yml",
    "sbom-utility.yaml",
    "sbom-utility.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/sbom-utility/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        // an explicit path is used as given; a missing file is reported on load
        return Some(path.to_path_buf());
    }

    if let Ok(cwd) = std::env::current_dir()
        && let Some(path) = find_config_in_dir(&cwd)
    {
        return Some(path);
    }

    if let Some(config_dir) = dirs::config_dir()
        && let Some(path) = find_config_in_dir(&config_dir.join(CONFIG_DIR_NAME))
    {
        return Some(path);
    }

    if let Some(home) = dirs::home_dir()
        && let Some(path) = find_config_in_dir(&home)
    {
        return Some(path);
    }

    None
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Error type for config file operations.
#[derive(Debug, thiserror::Error)]
pub enum ConfigFileError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Outcome of [`load_or_default`].
#[derive(Debug)]
pub struct LoadedConfig {
    pub config: AppConfig,
    /// File the config was read from
    pub path: Option<PathBuf>,
    /// A discovered file that failed to load and was skipped
    pub skipped: Option<(PathBuf, ConfigFileError)>,
}

/// Load config from the discovered file, or return the default.
///
/// An explicitly requested file that cannot be loaded is an error; a
/// discovered one is skipped and returned in [`LoadedConfig::skipped`] so the
/// caller can report it once logging is up.
pub fn load_or_default(explicit_path: Option<&Path>) -> Result<LoadedConfig, ConfigFileError> {
    load_from(discover_config_file(explicit_path), explicit_path.is_some())
}

fn load_from(path: Option<PathBuf>, explicit: bool) -> Result<LoadedConfig, ConfigFileError> {
    let Some(path) = path else {
        return Ok(LoadedConfig {
            config: AppConfig::default(),
            path: None,
            skipped: None,
        });
    };

    match load_config_file(&path) {
        Ok(config) => Ok(LoadedConfig {
            config,
            path: Some(path),
            skipped: None,
        }),
        Err(e) if explicit => Err(e),
        Err(e) => Ok(LoadedConfig {
            config: AppConfig::default(),
            path: None,
            skipped: Some((path, e)),
        }),
    }
}

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# sbom-utility configuration
# Place this file at .sbom-utility.yaml in your project root or ~/.config/sbom-utility/
# Command-line flags always override these settings.

{}",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}
