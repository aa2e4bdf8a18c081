//! Supported SBOM schemas and schema resolution.
//!
//! A fixed table of JSON schemas is compiled into the binary. A document is
//! matched to one of them either through its `$schema` URI or through the
//! format markers it carries (see [`detect_format`]).

mod detection;

pub use detection::{DetectedFormat, detect_format};

use crate::error::{ErrorContext, Result, SbomUtilityError, SchemaErrorKind};
use serde::Serialize;
use serde_json::Value;
use std::path::{Path, PathBuf};

/// SBOM document family.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SbomFormat {
    #[serde(rename = "CycloneDX")]
    CycloneDx,
    #[serde(rename = "SPDX")]
    Spdx,
}

impl SbomFormat {
    /// Human-readable name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CycloneDx => "CycloneDX",
            Self::Spdx => "SPDX",
        }
    }
}

impl std::fmt::Display for SbomFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// One bundled schema.
#[derive(Debug, Clone, Serialize)]
pub struct SchemaEntry {
    pub format: SbomFormat,
    pub version: &'static str,
    /// Canonical `$schema` URI documents use to reference this schema
    pub uri: &'static str,
    pub file_name: &'static str,
    /// Newest supported version of its format
    pub default: bool,
    #[serde(skip)]
    source: &'static str,
}

impl SchemaEntry {
    /// Parse the bundled schema text.
    pub fn load(&self) -> Result<Value> {
        serde_json::from_str(self.source).map_err(|e| {
            SbomUtilityError::schema(
                format!("bundled schema {}", self.file_name),
                SchemaErrorKind::InvalidJson(e.to_string()),
            )
        })
    }

    fn matches_uri(&self, uri: &str) -> bool {
        normalize_uri(self.uri) == normalize_uri(uri)
    }
}

macro_rules! bundled {
    ($format:expr, $version:literal, $uri:literal, $dir:literal, $file:literal, $default:literal) => {
        SchemaEntry {
            format: $format,
            version: $version,
            uri: $uri,
            file_name: $file,
            default: $default,
            source: include_str!(concat!("../../schemas/", $dir, "/", $file)),
        }
    };
}

/// Every schema this build can validate against.
pub static SUPPORTED_SCHEMAS: &[SchemaEntry] = &[
    bundled!(
        SbomFormat::CycloneDx,
        "1.4",
        "http://cyclonedx.org/schema/bom-1.4.schema.json",
        "cyclonedx",
        "bom-1.4.schema.json",
        false
    ),
    bundled!(
        SbomFormat::CycloneDx,
        "1.5",
        "http://cyclonedx.org/schema/bom-1.5.schema.json",
        "cyclonedx",
        "bom-1.5.schema.json",
        false
    ),
    bundled!(
        SbomFormat::CycloneDx,
        "1.6",
        "http://cyclonedx.org/schema/bom-1.6.schema.json",
        "cyclonedx",
        "bom-1.6.schema.json",
        true
    ),
    bundled!(
        SbomFormat::Spdx,
        "2.2",
        "https://raw.githubusercontent.com/spdx/spdx-spec/v2.2.2/schemas/spdx-schema.json",
        "spdx",
        "spdx-2.2.schema.json",
        false
    ),
    bundled!(
        SbomFormat::Spdx,
        "2.3",
        "https://raw.githubusercontent.com/spdx/spdx-spec/v2.3/schemas/spdx-schema.json",
        "spdx",
        "spdx-2.3.schema.json",
        true
    ),
];

/// Find the bundled schema whose URI matches `uri`.
///
/// Scheme (`http`/`https`) and a trailing `#` are ignored.
#[must_use]
pub fn find_by_uri(uri: &str) -> Option<&'static SchemaEntry> {
    SUPPORTED_SCHEMAS.iter().find(|entry| entry.matches_uri(uri))
}

/// Find the bundled schema for a format at an exact version.
#[must_use]
pub fn find_by_version(format: SbomFormat, version: &str) -> Option<&'static SchemaEntry> {
    SUPPORTED_SCHEMAS
        .iter()
        .find(|entry| entry.format == format && entry.version == version)
}

/// Versions of `format` that have a bundled schema, oldest first.
#[must_use]
pub fn supported_versions(format: SbomFormat) -> Vec<&'static str> {
    SUPPORTED_SCHEMAS
        .iter()
        .filter(|entry| entry.format == format)
        .map(|entry| entry.version)
        .collect()
}

fn normalize_uri(uri: &str) -> &str {
    let trimmed = uri.trim().trim_end_matches('#');
    trimmed
        .strip_prefix("https://")
        .or_else(|| trimmed.strip_prefix("http://"))
        .unwrap_or(trimmed)
}

/// Where a resolved schema came from.
#[derive(Debug, Clone)]
pub enum SchemaSource {
    Bundled(&'static SchemaEntry),
    File(PathBuf),
}

impl SchemaSource {
    /// URI or path used to identify the schema in reports.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Bundled(entry) => entry.uri.to_string(),
            Self::File(path) => path.display().to_string(),
        }
    }
}

/// A schema chosen for a document, ready to compile.
#[derive(Debug, Clone)]
pub struct ResolvedSchema {
    pub source: SchemaSource,
    pub schema: Value,
    /// Detected document format, when detection ran or the entry implies it
    pub format: Option<SbomFormat>,
    pub version: Option<String>,
}

/// Pick the schema for `document`.
///
/// Order: an explicit schema file, then the document's `$schema` URI, then
/// format detection.
pub fn resolve(document: &Value, schema_file: Option<&Path>) -> Result<ResolvedSchema> {
    if let Some(path) = schema_file {
        tracing::debug!("using schema override {}", path.display());
        let schema = load_schema_file(path)?;
        let detected = detect_format(document).ok();
        return Ok(ResolvedSchema {
            source: SchemaSource::File(path.to_path_buf()),
            schema,
            format: detected.as_ref().map(|d| d.format),
            version: detected.map(|d| d.version),
        });
    }

    if let Some(uri) = document.get("$schema").and_then(Value::as_str) {
        match find_by_uri(uri) {
            Some(entry) => {
                tracing::debug!("matched $schema {uri} to {}", entry.file_name);
                return from_entry(entry);
            }
            None => tracing::warn!("unrecognized $schema '{uri}'; falling back to format detection"),
        }
    }

    let detected = detect_format(document)?;
    let entry = find_by_version(detected.format, &detected.version).ok_or_else(|| {
        SbomUtilityError::unsupported_version(
            detected.format.name(),
            detected.version.clone(),
            &supported_versions(detected.format),
        )
    })?;
    tracing::debug!(
        "detected {} {}; using {}",
        detected.format,
        detected.version,
        entry.file_name
    );
    from_entry(entry)
}

fn from_entry(entry: &'static SchemaEntry) -> Result<ResolvedSchema> {
    Ok(ResolvedSchema {
        source: SchemaSource::Bundled(entry),
        schema: entry.load()?,
        format: Some(entry.format),
        version: Some(entry.version.to_string()),
    })
}

/// Load a schema from disk.
pub fn load_schema_file(path: &Path) -> Result<Value> {
    let content =
        std::fs::read_to_string(path).map_err(|e| SbomUtilityError::io(path, e))?;
    serde_json::from_str(&content)
        .map_err(|e| {
            SbomUtilityError::schema(
                "parsing schema",
                SchemaErrorKind::InvalidJson(e.to_string()),
            )
        })
        .with_context(|| format!("schema file {}", path.display()))
}

/// Compile a schema with the JSON Schema validator.
pub fn compile(schema: &Value) -> Result<jsonschema::Validator> {
    jsonschema::validator_for(schema).map_err(|e| {
        SbomUtilityError::schema("compiling schema", SchemaErrorKind::Compile(e.to_string()))
    })
}
