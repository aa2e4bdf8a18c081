//! CLI command handlers.
//!
//! This module provides testable command handlers that are invoked by main.rs.
//! Each handler receives a [`CommandContext`] carrying the parsed flags and
//! the effective configuration, and returns a process exit code or an error.

mod schema;
mod validate;
mod version;

pub use schema::run_schema;
pub use validate::run_validate;
pub use version::run_version;

use crate::config::{AppConfig, Flags};
use crate::log::{self, MAX_SEPARATOR_LENGTH};
use crate::pipeline::{OutputTarget, should_use_color};
use crate::reports::{ReportGenerator, create_reporter};
use std::io::Write;

/// Everything a handler may read: flags as parsed and the merged config.
#[derive(Debug, Clone, Copy)]
pub struct CommandContext<'a> {
    pub flags: &'a Flags,
    pub config: &'a AppConfig,
}

impl<'a> CommandContext<'a> {
    #[must_use]
    pub const fn new(flags: &'a Flags, config: &'a AppConfig) -> Self {
        Self { flags, config }
    }

    /// Where command output goes
    #[must_use]
    pub fn output_target(&self) -> OutputTarget {
        OutputTarget::from_option(self.config.output.file.clone())
    }

    /// Reporter for the configured format; text is colored only on a terminal.
    #[must_use]
    pub fn reporter(&self) -> Box<dyn ReportGenerator> {
        let colored = should_use_color(self.config.logging.no_color)
            && self.output_target().is_terminal();
        create_reporter(self.config.output.format, colored)
    }

    #[must_use]
    pub const fn quiet(&self) -> bool {
        self.config.output.quiet
    }
}

/// The greeting printed before a command runs.
#[must_use]
pub fn welcome_message(flags: &Flags) -> String {
    format!(
        "Welcome to the {}! Version `{}` ({})",
        flags.project, flags.version, flags.binary
    )
}

/// Write the greeting followed by an `=` rule of the same width.
pub fn write_welcome<W: Write>(out: &mut W, flags: &Flags) -> crate::error::Result<()> {
    let message = welcome_message(flags);
    writeln!(out, "{message}")?;
    log::write_separator(out, '=', message.chars().count().min(MAX_SEPARATOR_LENGTH))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::ReportFormat;
    use std::path::PathBuf;

    fn flags() -> Flags {
        Flags {
            project: "sbom-utility".to_string(),
            binary: "sbom-utility".to_string(),
            version: "0.1.0".to_string(),
            ..Flags::default()
        }
    }

    #[test]
    fn test_welcome_is_underlined() {
        let mut out = Vec::new();
        write_welcome(&mut out, &flags()).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines[0],
            "Welcome to the sbom-utility! Version `0.1.0` (sbom-utility)"
        );
        assert_eq!(lines[1].len(), lines[0].len());
        assert!(lines[1].chars().all(|c| c == '='));
    }

    #[test]
    fn test_long_welcome_rule_is_capped() {
        let mut long = flags();
        long.binary = "b".repeat(100);
        let mut out = Vec::new();
        write_welcome(&mut out, &long).unwrap();
        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().nth(1).unwrap().len(), MAX_SEPARATOR_LENGTH);
    }

    #[test]
    fn test_context_uses_configured_output() {
        let flags = flags();
        let mut config = AppConfig::default();
        config.output.format = ReportFormat::Json;
        config.output.file = Some(PathBuf::from("report.json"));

        let ctx = CommandContext::new(&flags, &config);
        assert_eq!(
            ctx.output_target(),
            OutputTarget::File(PathBuf::from("report.json"))
        );
        assert_eq!(ctx.reporter().format(), ReportFormat::Json);
    }
}
