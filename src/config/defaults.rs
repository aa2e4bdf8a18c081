//! Default values for sbom-utility configuration.

use super::types::{LoggingConfig, OutputConfig, ValidationConfig};
use crate::log::DEFAULT_LEVEL;
use crate::reports::ReportFormat;

/// Violations kept in a validation report unless configured otherwise.
pub const DEFAULT_MAX_ERRORS: usize = 10;

/// Upper bound accepted for `validation.max_errors`.
pub const MAX_ERRORS_LIMIT: usize = 10_000;

/// Directory name under the user config dir searched for config files.
pub const CONFIG_DIR_NAME: &str = "sbom-utility";

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LEVEL,
            no_color: false,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::default(),
            file: None,
            quiet: false,
        }
    }
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            schema_file: None,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::log::LogLevel;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.logging.level, LogLevel::Info);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.validation.max_errors, DEFAULT_MAX_ERRORS);
        assert!(config.validation.schema_file.is_none());
    }
}
