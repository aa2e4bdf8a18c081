//! JSON report generator.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::config::VersionInfo;
use crate::schema::SchemaEntry;
use crate::validation::ValidationReport;
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn render<T: Serialize + ?Sized>(&self, value: &T) -> Result<String, ReportError> {
        let rendered = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(rendered)
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate_validation_report(&self, report: &ValidationReport) -> Result<String, ReportError> {
        self.render(report)
    }

    fn generate_schema_list(&self, schemas: &[SchemaEntry]) -> Result<String, ReportError> {
        self.render(schemas)
    }

    fn generate_version(&self, info: &VersionInfo) -> Result<String, ReportError> {
        self.render(info)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{SUPPORTED_SCHEMAS, SbomFormat};
    use crate::validation::SchemaViolation;
    use serde_json::Value;

    fn invalid_report() -> ValidationReport {
        ValidationReport {
            input: "bom.json".to_string(),
            format: Some(SbomFormat::CycloneDx),
            version: Some("1.6".to_string()),
            schema: "http://cyclonedx.org/schema/bom-1.6.schema.json".to_string(),
            valid: false,
            error_count: 2,
            errors: vec![SchemaViolation {
                instance_path: "/components/0".to_string(),
                schema_path: "/definitions/component/required".to_string(),
                message: "\"name\" is a required property".to_string(),
            }],
        }
    }

    #[test]
    fn test_validation_report_fields() {
        let json = JsonReporter::new()
            .generate_validation_report(&invalid_report())
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["valid"], false);
        assert_eq!(value["format"], "CycloneDX");
        assert_eq!(value["error_count"], 2);
        assert_eq!(value["errors"][0]["instance_path"], "/components/0");
    }

    #[test]
    fn test_compact_output_is_single_line() {
        let json = JsonReporter::new()
            .pretty(false)
            .generate_validation_report(&invalid_report())
            .unwrap();
        assert!(!json.contains('\n'));
    }

    #[test]
    fn test_schema_list_omits_schema_text() {
        let json = JsonReporter::new()
            .generate_schema_list(SUPPORTED_SCHEMAS)
            .unwrap();
        let value: Value = serde_json::from_str(&json).unwrap();
        let entries = value.as_array().unwrap();
        assert_eq!(entries.len(), SUPPORTED_SCHEMAS.len());
        assert!(entries[0].get("source").is_none());
        assert_eq!(entries[0]["format"], "CycloneDX");
    }
}
