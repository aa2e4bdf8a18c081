//! Configuration for sbom-utility.
//!
//! Settings come from two layers:
//! - an optional YAML config file, discovered or given with `--config`
//! - command-line [`Flags`], which override the file
//!
//! # Configuration File
//!
//! Place a `.sbom-utility.yaml` file in your project root or
//! `~/.config/sbom-utility/`:
//!
//! ```yaml
//! logging:
//!   level: info
//! output:
//!   format: json
//! validation:
//!   max_errors: 0
//! ```

mod defaults;
pub mod file;
mod flags;
mod types;
mod validation;

pub use defaults::{DEFAULT_MAX_ERRORS, MAX_ERRORS_LIMIT};
pub use file::{
    ConfigFileError, LoadedConfig, discover_config_file, generate_example_config,
    load_config_file, load_or_default,
};
pub use flags::{Flags, VersionInfo};
pub use types::{AppConfig, LoggingConfig, OutputConfig, ValidationConfig};
pub use validation::{ConfigError, Validatable};

use crate::error::{Result, SbomUtilityError};

/// Generate a JSON Schema for the config file format.
///
/// Editors can use it for validation and autocompletion of
/// `.sbom-utility.yaml` files.
pub fn generate_json_schema() -> Result<String> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
        .map_err(|e| SbomUtilityError::config(format!("unable to serialize config schema: {e}")))
}
