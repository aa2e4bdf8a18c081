//! Leveled logging for the command line.
//!
//! Five levels are exposed to users, ordered from quietest to loudest:
//! `error < warning < info < trace < debug`. `trace` adds call sites,
//! UTC timestamps, and function enter/exit records; `debug` additionally
//! turns on dumps of internal data (flags, configuration, raw arguments).
//!
//! Records are emitted through `tracing`; [`init_logging`] installs the
//! subscriber once per process.

pub mod format;

use crate::error::{Result, SbomUtilityError};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::io::Write;
use std::str::FromStr;
use tracing_subscriber::fmt::format::FmtSpan;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub use format::{
    format_as_json, format_as_pretty_json, format_map, format_named_json, format_struct,
};

/// Level used when neither `--trace` nor `--debug` is given.
pub const DEFAULT_LEVEL: LogLevel = LogLevel::Info;

/// Longest separator line [`write_separator`] will print.
pub const MAX_SEPARATOR_LENGTH: usize = 80;

/// User-facing log level.
///
/// Ordering matters: a level enables every level that compares less than
/// or equal to it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors that stop execution
    Error,
    /// Problems that do not stop execution
    #[serde(alias = "warn")]
    Warning,
    /// General processing information
    #[default]
    Info,
    /// Function enter/exit, call sites and timestamps
    Trace,
    /// Internal logic and data dumps
    Debug,
}

impl LogLevel {
    /// Level selected by the `--trace` / `--debug` flags. Debug implies trace.
    #[must_use]
    pub const fn from_flags(trace: bool, debug: bool) -> Self {
        if debug {
            Self::Debug
        } else if trace {
            Self::Trace
        } else {
            DEFAULT_LEVEL
        }
    }

    /// Short display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARN",
            Self::Info => "INFO",
            Self::Trace => "TRACE",
            Self::Debug => "DEBUG",
        }
    }

    /// `tracing` filter directive for this level.
    ///
    /// `trace` maps to tracing's DEBUG and `debug` to tracing's TRACE,
    /// because this tool's `debug` is the louder of the two.
    #[must_use]
    pub const fn directive(self) -> &'static str {
        match self {
            Self::Error => "error",
            Self::Warning => "warn",
            Self::Info => "info",
            Self::Trace => "debug",
            Self::Debug => "trace",
        }
    }

    /// Whether records carry file, line, target and timestamp.
    #[must_use]
    pub fn is_verbose(self) -> bool {
        self >= Self::Trace
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for LogLevel {
    type Err = SbomUtilityError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "error" => Ok(Self::Error),
            "warn" | "warning" => Ok(Self::Warning),
            "info" => Ok(Self::Info),
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            other => Err(SbomUtilityError::config(format!(
                "unknown log level '{other}'. Valid options: error, warning, info, trace, debug"
            ))),
        }
    }
}

/// Filter for the given level. Dependencies stay at `warn` unless the user
/// asked for less; `RUST_LOG` replaces the whole filter when set.
#[must_use]
pub fn build_filter(level: LogLevel) -> EnvFilter {
    if let Ok(directives) = std::env::var("RUST_LOG") {
        return EnvFilter::new(directives);
    }
    EnvFilter::new(filter_directives(level))
}

fn filter_directives(level: LogLevel) -> String {
    if level <= LogLevel::Warning {
        level.directive().to_string()
    } else {
        format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level.directive())
    }
}

/// Install the global subscriber, writing to stderr.
///
/// Fails if a global subscriber has already been installed.
pub fn init_logging(level: LogLevel, use_color: bool) -> Result<()> {
    let verbose = level.is_verbose();
    let layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(use_color)
        .with_target(verbose)
        .with_file(verbose)
        .with_line_number(verbose)
        .with_span_events(if verbose {
            FmtSpan::ENTER | FmtSpan::EXIT
        } else {
            FmtSpan::NONE
        });

    let registry = tracing_subscriber::registry().with(build_filter(level));
    let installed = if verbose {
        registry.with(layer).try_init()
    } else {
        registry.with(layer.without_time()).try_init()
    };
    installed.map_err(|e| SbomUtilityError::config(format!("logger already initialized: {e}")))
}

/// Build a separator line of `repeat` copies of `sep`.
pub fn separator(sep: char, repeat: usize) -> Result<String> {
    if repeat > MAX_SEPARATOR_LENGTH {
        return Err(SbomUtilityError::format(format!(
            "invalid repeat length (>{MAX_SEPARATOR_LENGTH})"
        )));
    }
    Ok(std::iter::repeat_n(sep, repeat).collect())
}

/// Write a separator line followed by a newline.
pub fn write_separator<W: Write>(out: &mut W, sep: char, repeat: usize) -> Result<()> {
    let line = separator(sep, repeat)?;
    writeln!(out, "{line}")?;
    Ok(())
}

/// Write one line per process argument: ``arg[i]: `value` ``.
pub fn write_args<W, I, S>(out: &mut W, args: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    for (i, arg) in args.into_iter().enumerate() {
        writeln!(out, "arg[{i}]: `{}`", arg.as_ref())?;
    }
    Ok(())
}

/// Write a [`format_struct`] dump of `value`.
pub fn write_struct<W, T>(out: &mut W, name: &str, value: &T) -> Result<()>
where
    W: Write,
    T: Serialize + ?Sized,
{
    let block = format_struct(name, value)?;
    out.write_all(block.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_ordering() {
        assert!(LogLevel::Error < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Trace);
        assert!(LogLevel::Trace < LogLevel::Debug);
    }

    #[test]
    fn test_from_flags_debug_implies_trace() {
        assert_eq!(LogLevel::from_flags(false, false), LogLevel::Info);
        assert_eq!(LogLevel::from_flags(true, false), LogLevel::Trace);
        assert_eq!(LogLevel::from_flags(false, true), LogLevel::Debug);
        assert_eq!(LogLevel::from_flags(true, true), LogLevel::Debug);
    }

    #[test]
    fn test_parse_levels() {
        assert_eq!("WARN".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!("warning".parse::<LogLevel>().unwrap(), LogLevel::Warning);
        assert_eq!(" debug ".parse::<LogLevel>().unwrap(), LogLevel::Debug);
        assert!("verbose".parse::<LogLevel>().is_err());
    }

    #[test]
    fn test_verbosity_and_directives() {
        assert!(!LogLevel::Info.is_verbose());
        assert!(LogLevel::Trace.is_verbose());
        assert_eq!(filter_directives(LogLevel::Error), "error");
        assert_eq!(filter_directives(LogLevel::Trace), "warn,sbom_utility=debug");
        assert_eq!(filter_directives(LogLevel::Debug), "warn,sbom_utility=trace");
    }

    #[test]
    fn test_separator_limits() {
        assert_eq!(separator('=', 5).unwrap(), "=====");
        assert_eq!(separator('-', 0).unwrap(), "");
        assert_eq!(separator('*', 80).unwrap().len(), 80);
        let err = separator('=', 81).unwrap_err();
        assert!(err.to_string().contains("invalid repeat length (>80)"));
    }

    #[test]
    fn test_write_separator_appends_newline() {
        let mut buf = Vec::new();
        write_separator(&mut buf, '=', 3).unwrap();
        assert_eq!(buf, b"===\n");

        let mut untouched = Vec::new();
        assert!(write_separator(&mut untouched, '=', 100).is_err());
        assert!(untouched.is_empty());
    }

    #[test]
    fn test_write_args() {
        let mut buf = Vec::new();
        write_args(&mut buf, ["sbom-utility", "validate", "-i", "bom.json"]).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert_eq!(
            text,
            "arg[0]: `sbom-utility`\narg[1]: `validate`\narg[2]: `-i`\narg[3]: `bom.json`\n"
        );
    }

    #[test]
    fn test_write_struct() {
        #[derive(Serialize)]
        struct Pair {
            left: u8,
        }
        let mut buf = Vec::new();
        write_struct(&mut buf, "Pair", &Pair { left: 1 }).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.starts_with("  Pair (Pair) = {\n"));
        assert!(text.contains("left (number)"));
    }
}
