//! Reading SBOM documents from disk.

use crate::error::{DetectionErrorKind, ErrorContext, Result, SbomUtilityError};
use serde_json::Value;
use std::path::{Path, PathBuf};

/// A JSON document read from disk.
#[derive(Debug, Clone)]
pub struct ParsedDocument {
    path: PathBuf,
    value: Value,
}

impl ParsedDocument {
    /// Parse `content` as JSON, remembering where it came from.
    ///
    /// Bytes that are not UTF-8 fail like any other malformed JSON.
    pub fn parse(path: impl Into<PathBuf>, content: &[u8]) -> Result<Self> {
        let path = path.into();
        let value = serde_json::from_slice(content)
            .map_err(|e| {
                SbomUtilityError::detection(
                    "parsing JSON",
                    DetectionErrorKind::InvalidJson(e.to_string()),
                )
            })
            .with_context(|| path.display().to_string())?;
        Ok(Self { path, value })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The parsed JSON value
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }
}

/// Read and parse a JSON document.
pub fn read_document(path: &Path) -> Result<ParsedDocument> {
    tracing::debug!("reading document {}", path.display());
    let content = std::fs::read(path).map_err(|e| SbomUtilityError::io(path, e))?;
    tracing::trace!("read {} bytes from {}", content.len(), path.display());
    ParsedDocument::parse(path, &content)
}
