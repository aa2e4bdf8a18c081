//! SBOM format detection from a parsed JSON document.
//!
//! CycloneDX documents declare `"bomFormat": "CycloneDX"` and a
//! `specVersion`; SPDX documents declare `"spdxVersion": "SPDX-X.Y"`.

use super::SbomFormat;
use crate::error::{DetectionErrorKind, Result, SbomUtilityError};
use serde_json::Value;

const CYCLONEDX_MARKER: &str = "CycloneDX";
const SPDX_VERSION_PREFIX: &str = "SPDX-";

/// Format and version read from a document's markers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetectedFormat {
    pub format: SbomFormat,
    pub version: String,
}

/// Identify the SBOM format of `document`.
///
/// The version is returned as written; whether a schema exists for it is
/// decided by the caller.
pub fn detect_format(document: &Value) -> Result<DetectedFormat> {
    let root = document.as_object().ok_or_else(|| {
        SbomUtilityError::detection("inspecting document root", DetectionErrorKind::NotAnObject)
    })?;

    if root.get("bomFormat").and_then(Value::as_str) == Some(CYCLONEDX_MARKER) {
        let version = root
            .get("specVersion")
            .and_then(Value::as_str)
            .ok_or_else(|| {
                SbomUtilityError::unsupported_version(
                    SbomFormat::CycloneDx.name(),
                    "<missing specVersion>",
                    &super::supported_versions(SbomFormat::CycloneDx),
                )
            })?;
        return Ok(DetectedFormat {
            format: SbomFormat::CycloneDx,
            version: version.trim().to_string(),
        });
    }

    if let Some(raw) = root.get("spdxVersion").and_then(Value::as_str) {
        let version = raw.trim().strip_prefix(SPDX_VERSION_PREFIX).unwrap_or(raw.trim());
        return Ok(DetectedFormat {
            format: SbomFormat::Spdx,
            version: version.to_string(),
        });
    }

    Err(SbomUtilityError::detection(
        "no bomFormat or spdxVersion member",
        DetectionErrorKind::UnknownFormat,
    ))
}
