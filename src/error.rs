//! Unified error types for sbom-utility.
//!
//! Library operations return [`Result`], whose error type carries enough
//! context to tell a user what went wrong and where. Command handlers in
//! [`crate::cli`] wrap these in `anyhow` and map them onto exit codes.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for sbom-utility operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SbomUtilityError {
    /// The document's SBOM format could not be determined or is unsupported
    #[error("Failed to detect SBOM format: {context}")]
    Detection {
        context: String,
        #[source]
        source: DetectionErrorKind,
    },

    /// A schema could not be loaded or compiled
    #[error("Schema error: {context}")]
    Schema {
        context: String,
        #[source]
        source: SchemaErrorKind,
    },

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Value could not be rendered by the formatter
    #[error("Format error: {0}")]
    Format(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Validation errors (missing inputs, bad arguments)
    #[error("Validation failed: {0}")]
    Validation(String),
}

/// Specific format detection error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum DetectionErrorKind {
    #[error("Unknown SBOM format - expected CycloneDX or SPDX markers")]
    UnknownFormat,

    #[error("Unsupported {format} version: {version} (supported: {supported})")]
    UnsupportedVersion {
        format: String,
        version: String,
        supported: String,
    },

    #[error("Invalid JSON document: {0}")]
    InvalidJson(String),

    #[error("Document root must be a JSON object")]
    NotAnObject,
}

/// Specific schema error kinds
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum SchemaErrorKind {
    #[error("Schema is not valid JSON: {0}")]
    InvalidJson(String),

    #[error("Schema compilation failed: {0}")]
    Compile(String),
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for sbom-utility operations
pub type Result<T> = std::result::Result<T, SbomUtilityError>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl SbomUtilityError {
    /// Create a detection error with context
    pub fn detection(context: impl Into<String>, source: DetectionErrorKind) -> Self {
        Self::Detection {
            context: context.into(),
            source,
        }
    }

    /// Create a detection error for a recognized format at an unsupported version
    pub fn unsupported_version(
        format: impl Into<String>,
        version: impl Into<String>,
        supported: &[&str],
    ) -> Self {
        Self::detection(
            "unsupported version",
            DetectionErrorKind::UnsupportedVersion {
                format: format.into(),
                version: version.into(),
                supported: supported.join(", "),
            },
        )
    }

    /// Create a schema error with context
    pub fn schema(context: impl Into<String>, source: SchemaErrorKind) -> Self {
        Self::Schema {
            context: context.into(),
            source,
        }
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let path = path.into();
        let message = format!("{source}");
        Self::Io {
            path: Some(path),
            message,
            source,
        }
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a formatter error
    pub fn format(message: impl Into<String>) -> Self {
        Self::Format(message.into())
    }

    /// Whether this error means the input is not a supported SBOM.
    ///
    /// Callers use this to tell "wrong kind of document" apart from
    /// operational failures.
    #[must_use]
    pub const fn is_unsupported_format(&self) -> bool {
        matches!(self, Self::Detection { .. })
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for SbomUtilityError {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<serde_json::Error> for SbomUtilityError {
    fn from(err: serde_json::Error) -> Self {
        Self::detection(
            "JSON deserialization",
            DetectionErrorKind::InvalidJson(err.to_string()),
        )
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// Context is chained rather than replaced, so a failure deep in schema
/// resolution reads as `outer: inner: cause`.
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<SbomUtilityError>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: SbomUtilityError, new_ctx: &str) -> SbomUtilityError {
    match err {
        SbomUtilityError::Detection {
            context: existing,
            source,
        } => SbomUtilityError::Detection {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomUtilityError::Schema {
            context: existing,
            source,
        } => SbomUtilityError::Schema {
            context: chain_context(new_ctx, &existing),
            source,
        },
        SbomUtilityError::Io {
            path,
            message,
            source,
        } => SbomUtilityError::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        SbomUtilityError::Format(msg) => SbomUtilityError::Format(chain_context(new_ctx, &msg)),
        SbomUtilityError::Config(msg) => SbomUtilityError::Config(chain_context(new_ctx, &msg)),
        SbomUtilityError::Validation(msg) => {
            SbomUtilityError::Validation(chain_context(new_ctx, &msg))
        }
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}

/// Extension trait for Option types to convert to errors with context.
pub trait OptionContext<T> {
    /// Convert None to a validation error with the given context.
    fn context_none(self, context: impl Into<String>) -> Result<T>;
}

impl<T> OptionContext<T> for Option<T> {
    fn context_none(self, context: impl Into<String>) -> Result<T> {
        self.ok_or_else(|| SbomUtilityError::Validation(context.into()))
    }
}
