//! Configuration types for sbom-utility.

use super::flags::Flags;
use crate::log::LogLevel;
use crate::reports::ReportFormat;
use crate::validation::ValidationOptions;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration loaded from a config file and overlaid with
/// command-line flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Logging level and coloring
    pub logging: LoggingConfig,
    /// Output configuration (format, file, quiet)
    pub output: OutputConfig,
    /// Schema validation settings
    pub validation: ValidationConfig,
}

/// Logging configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct LoggingConfig {
    /// Level: error, warning, info, trace, debug
    pub level: LogLevel,
    /// Disable ANSI colors in logs and text reports
    pub no_color: bool,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<PathBuf>,
    /// Suppress the banner and informational messages
    pub quiet: bool,
}

/// Validation configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ValidationConfig {
    /// Validate against this schema file instead of a bundled schema
    #[serde(skip_serializing_if = "Option::is_none")]
    pub schema_file: Option<PathBuf>,
    /// Maximum violations listed per document (0 = unlimited)
    pub max_errors: usize,
}

impl AppConfig {
    /// Overlay command-line flags. Flags that were given always win; flags
    /// left at their defaults keep the file's values.
    pub fn merge_flags(&mut self, flags: &Flags) {
        if flags.trace || flags.debug {
            self.logging.level = flags.log_level();
        }
        if flags.no_color {
            self.logging.no_color = true;
        }

        if let Some(format) = flags.output_format {
            self.output.format = format;
        }
        if flags.output_file.is_some() {
            self.output.file.clone_from(&flags.output_file);
        }
        if flags.quiet {
            self.output.quiet = true;
        }

        // quiet drops informational records unless more detail was asked for
        if self.output.quiet && self.logging.level == LogLevel::Info {
            self.logging.level = LogLevel::Warning;
        }
    }

    /// Options for a validation run.
    #[must_use]
    pub fn validation_options(&self) -> ValidationOptions {
        ValidationOptions {
            schema_file: self.validation.schema_file.clone(),
            max_errors: self.validation.max_errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_merge_flags_overrides_file_values() {
        let mut config = AppConfig::default();
        config.output.format = ReportFormat::Json;
        config.logging.level = LogLevel::Error;

        let flags = Flags {
            debug: true,
            output_format: Some(ReportFormat::Text),
            output_file: Some(PathBuf::from("out.txt")),
            ..Flags::default()
        };
        config.merge_flags(&flags);

        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.output.format, ReportFormat::Text);
        assert_eq!(config.output.file, Some(PathBuf::from("out.txt")));
    }

    #[test]
    fn test_merge_flags_keeps_file_values_for_unset_flags() {
        let mut config = AppConfig::default();
        config.output.format = ReportFormat::Json;
        config.logging.level = LogLevel::Trace;
        config.validation.max_errors = 3;

        config.merge_flags(&Flags::default());

        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.logging.level, LogLevel::Trace);
        assert_eq!(config.validation_options().max_errors, 3);
    }

    #[test]
    fn test_quiet_lowers_info_to_warning() {
        let mut config = AppConfig::default();
        config.merge_flags(&Flags {
            quiet: true,
            ..Flags::default()
        });
        assert!(config.output.quiet);
        assert_eq!(config.logging.level, LogLevel::Warning);

        let mut config = AppConfig::default();
        config.merge_flags(&Flags {
            quiet: true,
            trace: true,
            ..Flags::default()
        });
        assert_eq!(config.logging.level, LogLevel::Trace);
    }

    #[test]
    fn test_yaml_round_trip_uses_lowercase_names() {
        let yaml = "logging:\n  level: warn\noutput:\n  format: json\nvalidation:\n  max_errors: 0\n";
        let config: AppConfig = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.logging.level, LogLevel::Warning);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert_eq!(config.validation.max_errors, 0);

        let rendered = serde_yaml::to_string(&config).unwrap();
        assert!(rendered.contains("level: warning"));
        assert!(rendered.contains("format: json"));
    }
}
