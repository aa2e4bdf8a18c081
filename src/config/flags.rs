//! Command-line flag values shared by every subcommand.

use crate::log::{format_struct, LogLevel};
use crate::reports::ReportFormat;
use serde::Serialize;
use std::path::PathBuf;

/// Option values parsed from the command line, plus program identity.
///
/// Built once in `main` and passed by reference to handlers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Flags {
    pub project: String,
    pub binary: String,
    pub version: String,
    /// Empty when the current directory cannot be read
    pub working_dir: String,
    /// Empty when the executable path cannot be determined
    pub exec_path: String,
    pub trace: bool,
    pub debug: bool,
    pub quiet: bool,
    pub no_color: bool,
    pub input_file: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub output_format: Option<ReportFormat>,
    pub config_file: Option<PathBuf>,
}

impl Flags {
    /// Identity fields filled in, working directory and executable path
    /// captured from the process. Option values start at their defaults.
    #[must_use]
    pub fn from_environment(
        project: impl Into<String>,
        binary: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let working_dir = std::env::current_dir()
            .map(|p| p.display().to_string())
            .unwrap_or_default();
        let exec_path = std::env::current_exe()
            .map(|p| p.display().to_string())
            .unwrap_or_default();

        Self {
            project: project.into(),
            binary: binary.into(),
            version: version.into(),
            working_dir,
            exec_path,
            ..Self::default()
        }
    }

    /// Log level selected by `--trace` / `--debug`.
    #[must_use]
    pub const fn log_level(&self) -> LogLevel {
        LogLevel::from_flags(self.trace, self.debug)
    }

    #[must_use]
    pub fn version_info(&self) -> VersionInfo {
        VersionInfo {
            project: self.project.clone(),
            binary: self.binary.clone(),
            version: self.version.clone(),
        }
    }
}

impl std::fmt::Display for Flags {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match format_struct("Flags", self) {
            Ok(block) => f.write_str(&block),
            Err(e) => writeln!(f, "{e}"),
        }
    }
}

/// Program identity reported by the `version` subcommand.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionInfo {
    pub project: String,
    pub binary: String,
    pub version: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_environment_captures_identity() {
        let flags = Flags::from_environment("sbom-utility", "sbom-utility", "0.1.0");
        assert_eq!(flags.project, "sbom-utility");
        assert_eq!(flags.version, "0.1.0");
        assert!(!flags.working_dir.is_empty());
        assert!(!flags.trace && !flags.debug && !flags.quiet);
        assert_eq!(flags.input_file, None);
    }

    #[test]
    fn test_log_level_debug_wins() {
        let mut flags = Flags::default();
        assert_eq!(flags.log_level(), LogLevel::Info);
        flags.trace = true;
        assert_eq!(flags.log_level(), LogLevel::Trace);
        flags.debug = true;
        assert_eq!(flags.log_level(), LogLevel::Debug);
    }

    #[test]
    fn test_display_dumps_fields() {
        let flags = Flags {
            project: "sbom-utility".to_string(),
            input_file: Some(PathBuf::from("bom.json")),
            output_format: Some(ReportFormat::Json),
            ..Flags::default()
        };
        let text = flags.to_string();
        assert!(text.starts_with("  Flags (Flags) = {\n"));
        assert!(text.contains("\t     project (string)   : sbom-utility\n"));
        assert!(text.contains("\t  input_file (string)   : bom.json\n"));
        assert!(text.contains("\t       trace (bool)     : false\n"));
        assert!(text.contains("\t output_file (null)     : null\n"));
        assert!(text.contains(": json\n"));
        assert!(text.ends_with("  }\n"));
    }

    #[test]
    fn test_version_info_serializes() {
        let flags = Flags::from_environment("sbom-utility", "sbomu", "1.2.3");
        let json = serde_json::to_value(flags.version_info()).unwrap();
        assert_eq!(json["binary"], "sbomu");
        assert_eq!(json["version"], "1.2.3");
    }
}
