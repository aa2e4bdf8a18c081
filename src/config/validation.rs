//! Configuration validation for sbom-utility.

use super::defaults::MAX_ERRORS_LIMIT;
use super::types::{AppConfig, OutputConfig, ValidationConfig};

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();
        errors.extend(self.output.validate());
        errors.extend(self.validation.validate());
        errors
    }
}

impl Validatable for OutputConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if let Some(ref file_path) = self.file
            && let Some(parent) = file_path.parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            errors.push(ConfigError {
                field: "output.file".to_string(),
                message: format!("Parent directory does not exist: {}", parent.display()),
            });
        }

        errors
    }
}

impl Validatable for ValidationConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.max_errors > MAX_ERRORS_LIMIT {
            errors.push(ConfigError {
                field: "validation.max_errors".to_string(),
                message: format!(
                    "max_errors must be at most {MAX_ERRORS_LIMIT} (0 = unlimited), got {}",
                    self.max_errors
                ),
            });
        }

        if let Some(ref schema_file) = self.schema_file
            && !schema_file.is_file()
        {
            errors.push(ConfigError {
                field: "validation.schema_file".to_string(),
                message: format!("Schema file does not exist: {}", schema_file.display()),
            });
        }

        errors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().is_valid());
    }

    #[test]
    fn test_max_errors_limit() {
        let config = ValidationConfig {
            max_errors: MAX_ERRORS_LIMIT + 1,
            ..ValidationConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "validation.max_errors");

        let unlimited = ValidationConfig {
            max_errors: 0,
            ..ValidationConfig::default()
        };
        assert!(unlimited.is_valid());
    }

    #[test]
    fn test_missing_schema_file() {
        let config = ValidationConfig {
            schema_file: Some(PathBuf::from("/nonexistent/schema.json")),
            ..ValidationConfig::default()
        };
        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().starts_with("validation.schema_file: "));
    }

    #[test]
    fn test_output_parent_dir_must_exist() {
        let config = OutputConfig {
            file: Some(PathBuf::from("/nonexistent-dir/report.json")),
            ..OutputConfig::default()
        };
        assert!(!config.is_valid());

        let relative = OutputConfig {
            file: Some(PathBuf::from("report.json")),
            ..OutputConfig::default()
        };
        assert!(relative.is_valid());
    }
}
