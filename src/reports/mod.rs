//! Report generation for command results.
//!
//! Two output formats are supported:
//! - Text: aligned, human-readable output, optionally colored
//! - JSON: structured data for programmatic integration

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::ReportFormat;

use crate::config::VersionInfo;
use crate::schema::SchemaEntry;
use crate::validation::ValidationReport;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

impl From<serde_json::Error> for ReportError {
    fn from(err: serde_json::Error) -> Self {
        Self::SerializationError(err.to_string())
    }
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render the outcome of validating one document
    fn generate_validation_report(&self, report: &ValidationReport) -> Result<String, ReportError>;

    /// Render the table of supported schemas
    fn generate_schema_list(&self, schemas: &[SchemaEntry]) -> Result<String, ReportError>;

    /// Render program identity
    fn generate_version(&self, info: &VersionInfo) -> Result<String, ReportError>;

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, use_color: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Text => {
            if use_color {
                Box::new(SummaryReporter::new())
            } else {
                Box::new(SummaryReporter::new().no_color())
            }
        }
        ReportFormat::Json => Box::new(JsonReporter::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_reporter_matches_format() {
        for format in [ReportFormat::Text, ReportFormat::Json] {
            assert_eq!(create_reporter(format, false).format(), format);
        }
    }
}
