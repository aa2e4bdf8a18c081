//! Schema validation of SBOM documents.
//!
//! The work is split in three: [`schema::resolve`] picks a schema for the
//! document, [`schema::compile`] hands it to the JSON Schema validator, and
//! this module runs the validator and aggregates what it reports into a
//! [`ValidationReport`].

use crate::config::DEFAULT_MAX_ERRORS;
use crate::error::{ErrorContext, Result};
use crate::pipeline::read_document;
use crate::schema::{self, SbomFormat};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// Knobs for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOptions {
    /// Validate against this schema instead of a bundled one
    pub schema_file: Option<PathBuf>,
    /// Maximum errors kept in the report; 0 keeps all
    pub max_errors: usize,
}

impl Default for ValidationOptions {
    fn default() -> Self {
        Self {
            schema_file: None,
            max_errors: DEFAULT_MAX_ERRORS,
        }
    }
}

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchemaViolation {
    /// JSON pointer into the document
    pub instance_path: String,
    /// JSON pointer into the schema
    pub schema_path: String,
    pub message: String,
}

/// Outcome of validating one document.
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub input: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<SbomFormat>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// URI or path of the schema used
    pub schema: String,
    pub valid: bool,
    /// Total violations found, including any not kept in `errors`
    pub error_count: usize,
    pub errors: Vec<SchemaViolation>,
}

impl ValidationReport {
    /// Whether some violations were dropped by the `max_errors` limit.
    #[must_use]
    pub fn is_truncated(&self) -> bool {
        self.errors.len() < self.error_count
    }
}

/// Validate the JSON document at `path`.
#[tracing::instrument(level = "debug", skip_all, fields(path = %path.display()), err)]
pub fn validate_file(path: &Path, options: &ValidationOptions) -> Result<ValidationReport> {
    let parsed = read_document(path)?;
    validate_document(parsed.value(), &path.display().to_string(), options)
}

/// Validate an in-memory document; `input` names it in the report.
pub fn validate_document(
    document: &Value,
    input: &str,
    options: &ValidationOptions,
) -> Result<ValidationReport> {
    let resolved = schema::resolve(document, options.schema_file.as_deref())?;
    let schema_name = resolved.source.describe();

    let validator =
        schema::compile(&resolved.schema).with_context(|| format!("schema {schema_name}"))?;
    tracing::debug!("compiled schema {schema_name}");

    let mut error_count = 0;
    let mut errors = Vec::new();
    for error in validator.iter_errors(document) {
        error_count += 1;
        if options.max_errors == 0 || errors.len() < options.max_errors {
            errors.push(SchemaViolation {
                instance_path: pointer_or_root(error.instance_path.to_string()),
                schema_path: pointer_or_root(error.schema_path.to_string()),
                message: error.to_string(),
            });
        }
    }

    if error_count > 0 {
        tracing::debug!("{input}: {error_count} schema violation(s)");
    }

    Ok(ValidationReport {
        input: input.to_string(),
        format: resolved.format,
        version: resolved.version,
        schema: schema_name,
        valid: error_count == 0,
        error_count,
        errors,
    })
}

fn pointer_or_root(pointer: String) -> String {
    if pointer.is_empty() {
        "/".to_string()
    } else {
        pointer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn cyclonedx_doc() -> Value {
        json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.5",
            "version": 1,
            "components": [
                {"type": "library", "name": "serde", "version": "1.0.219"}
            ]
        })
    }

    #[test]
    fn test_valid_document() {
        let report =
            validate_document(&cyclonedx_doc(), "inline", &ValidationOptions::default()).unwrap();
        assert!(report.valid);
        assert_eq!(report.error_count, 0);
        assert!(report.errors.is_empty());
        assert_eq!(report.format, Some(SbomFormat::CycloneDx));
        assert_eq!(report.version.as_deref(), Some("1.5"));
        assert!(report.schema.ends_with("bom-1.5.schema.json"));
    }

    #[test]
    fn test_violations_are_collected() {
        let mut doc = cyclonedx_doc();
        doc["components"][0]
            .as_object_mut()
            .unwrap()
            .remove("name");
        doc["version"] = json!(0);

        let report = validate_document(&doc, "inline", &ValidationOptions::default()).unwrap();
        assert!(!report.valid);
        assert_eq!(report.error_count, 2);
        assert!(!report.is_truncated());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.instance_path == "/components/0" && e.message.contains("name"))
        );
        assert!(report.errors.iter().any(|e| e.instance_path == "/version"));
    }

    #[test]
    fn test_max_errors_truncates_but_counts_all() {
        let doc = json!({
            "bomFormat": "CycloneDX",
            "specVersion": "1.6",
            "version": 0,
            "serialNumber": "not-a-urn",
            "unexpected": true
        });
        let options = ValidationOptions {
            max_errors: 1,
            ..ValidationOptions::default()
        };
        let report = validate_document(&doc, "inline", &options).unwrap();
        assert_eq!(report.error_count, 3);
        assert_eq!(report.errors.len(), 1);
        assert!(report.is_truncated());

        let unlimited = ValidationOptions {
            max_errors: 0,
            ..ValidationOptions::default()
        };
        let report = validate_document(&doc, "inline", &unlimited).unwrap();
        assert_eq!(report.errors.len(), 3);
    }

    #[test]
    fn test_schema_override() {
        let dir = tempfile::tempdir().unwrap();
        let schema_path = dir.path().join("custom.schema.json");
        std::fs::write(
            &schema_path,
            r#"{"type": "object", "required": ["custom"]}"#,
        )
        .unwrap();

        let options = ValidationOptions {
            schema_file: Some(schema_path.clone()),
            ..ValidationOptions::default()
        };
        let report = validate_document(&cyclonedx_doc(), "inline", &options).unwrap();
        assert!(!report.valid);
        assert_eq!(report.errors[0].instance_path, "/");
        assert_eq!(report.schema, schema_path.display().to_string());
        // detection still fills in the format for the report
        assert_eq!(report.format, Some(SbomFormat::CycloneDx));
    }

    #[test]
    fn test_unknown_document_is_unsupported() {
        let err = validate_document(
            &json!({"hello": "world"}),
            "inline",
            &ValidationOptions::default(),
        )
        .unwrap_err();
        assert!(err.is_unsupported_format());
    }
}
