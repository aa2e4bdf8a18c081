//! Text report generator for shell output.
//!
//! Provides compact, aligned, human-readable output for terminal usage.

use super::{ReportError, ReportFormat, ReportGenerator};
use crate::config::VersionInfo;
use crate::schema::SchemaEntry;
use crate::validation::ValidationReport;
use std::fmt::Write;

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

/// Text reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new text reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate_validation_report(&self, report: &ValidationReport) -> Result<String, ReportError> {
        let mut out = String::new();

        let status = if report.valid {
            self.color("[VALID]", "green")
        } else {
            self.color("[INVALID]", "red")
        };
        writeln!(out, "{status} {}", report.input)?;

        if let (Some(format), Some(version)) = (report.format, report.version.as_deref()) {
            writeln!(out, "  {:<8} {format} {version}", "format:")?;
        }
        writeln!(out, "  {:<8} {}", "schema:", self.color(&report.schema, "dim"))?;

        if report.valid {
            return Ok(out);
        }

        let count = if report.is_truncated() {
            format!(
                "{} (showing first {})",
                report.error_count,
                report.errors.len()
            )
        } else {
            report.error_count.to_string()
        };
        writeln!(out, "  {:<8} {}", "errors:", self.color(&count, "yellow"))?;

        for (index, error) in report.errors.iter().enumerate() {
            writeln!(
                out,
                "    {:>3}. {}: {}",
                index + 1,
                self.color(&error.instance_path, "bold"),
                error.message
            )?;
        }

        Ok(out)
    }

    fn generate_schema_list(&self, schemas: &[SchemaEntry]) -> Result<String, ReportError> {
        let mut out = String::new();

        writeln!(
            out,
            "{}",
            self.color(
                &format!("{:<10} {:<8} {:<8} {}", "FORMAT", "VERSION", "DEFAULT", "URI"),
                "bold"
            )
        )?;
        for entry in schemas {
            let default = if entry.default { "yes" } else { "" };
            writeln!(
                out,
                "{:<10} {:<8} {:<8} {}",
                entry.format.name(),
                entry.version,
                default,
                entry.uri
            )?;
        }

        Ok(out)
    }

    fn generate_version(&self, info: &VersionInfo) -> Result<String, ReportError> {
        let mut out = format!("{} version {}", info.project, info.version);
        if info.binary != info.project {
            write!(out, " ({})", info.binary)?;
        }
        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Text
    }
}
