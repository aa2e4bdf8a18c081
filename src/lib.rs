//! **Software Bill-of-Materials (SBOM) base utility.**
//!
//! `sbom-utility` checks SBOM documents against the JSON schemas of the
//! formats they declare. It powers the `sbom-utility` command-line tool and
//! can be used directly as a library.
//!
//! ## Key Features
//!
//! - **Format detection**: recognizes **CycloneDX** (1.4, 1.5, 1.6) and
//!   **SPDX** (2.2, 2.3) JSON documents from their `$schema` URI or their
//!   format markers.
//! - **Schema validation**: compiles the matching bundled schema with the
//!   `jsonschema` crate and collects every violation with its location.
//! - **Leveled logging**: five user-facing levels mapped onto `tracing`, plus
//!   helpers that dump structs, arguments and separator lines.
//! - **Reporting**: results as aligned text or JSON.
//!
//! ## Core Modules
//!
//! - **[`schema`]**: the table of supported schemas, format detection, and
//!   schema resolution.
//! - **[`validation`]**: runs a document through its schema and builds a
//!   [`ValidationReport`].
//! - **[`log`]**: log levels, subscriber setup, and value formatting.
//! - **[`config`]**: command-line [`Flags`] and the YAML config file.
//! - **[`reports`]**: text and JSON renderers.
//! - **[`cli`]**: the subcommand handlers used by the binary.
//!
//! ## Validating a Document
//!
//! ```no_run
//! use std::path::Path;
//! use sbom_utility::{validate_file, ValidationOptions};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let report = validate_file(Path::new("bom.cdx.json"), &ValidationOptions::default())?;
//!
//!     if report.valid {
//!         println!("{} is valid", report.input);
//!     } else {
//!         for error in &report.errors {
//!             println!("{}: {}", error.instance_path, error.message);
//!         }
//!     }
//!
//!     Ok(())
//! }
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]

pub mod cli;
pub mod config;
pub mod error;
pub mod log;
pub mod pipeline;
pub mod reports;
pub mod schema;
pub mod validation;

pub use config::{AppConfig, Flags};
pub use error::{ErrorContext, Result, SbomUtilityError};
pub use log::LogLevel;
pub use reports::{ReportFormat, ReportGenerator};
pub use schema::{SUPPORTED_SCHEMAS, SbomFormat, SchemaEntry, detect_format};
pub use validation::{
    SchemaViolation, ValidationOptions, ValidationReport, validate_document, validate_file,
};
