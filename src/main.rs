//! sbom-utility: Software Bill-of-Materials (SBOM) base utility
//!
//! Validates CycloneDX and SPDX JSON documents against their schemas.

#![allow(clippy::struct_excessive_bools)]

use anyhow::{Context, Result};
use clap::{Args, CommandFactory, Parser, Subcommand, error::ErrorKind};
use clap_complete::{Shell, generate};
use sbom_utility::{
    cli::{self, CommandContext},
    config::{self, AppConfig, Flags, Validatable},
    log,
    pipeline::{exit_codes, should_use_color, write_output},
    reports::ReportFormat,
};
use std::io::{self, IsTerminal};
use std::path::PathBuf;

/// Build long version string with schema support info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nSupported SBOM schemas:",
        "\n  CycloneDX: 1.4, 1.5, 1.6 (JSON)",
        "\n  SPDX:      2.2, 2.3 (JSON)",
        "\n\nOutput formats:",
        "\n  text, json"
    )
}

#[derive(Parser)]
#[command(name = "sbom-utility")]
#[command(version, long_version = build_long_version())]
#[command(about = "Software Bill-of-Materials (SBOM) base utility.")]
#[command(
    long_about = "This utility serves as centralized command line interface into various \
                  Software Bill-of-Materials (SBOM) helper utilities."
)]
#[command(after_help = "EXIT CODES:
    0  Success (document valid)
    1  Document failed schema validation
    2  Document format unknown or version unsupported
    3  Error occurred

EXAMPLES:
    # Validate a CycloneDX document
    sbom-utility validate -i bom.cdx.json

    # Machine-readable result, every violation listed
    sbom-utility validate -i bom.cdx.json -f json --max-errors 0

    # Validate against a local schema file
    sbom-utility validate -i bom.spdx.json --schema spdx-schema.json")]
struct Cli {
    /// Enable trace logging (call sites, timestamps, enter/exit)
    #[arg(short, long, global = true)]
    trace: bool,

    /// Enable debug logging (implies trace)
    #[arg(short, long, global = true)]
    debug: bool,

    /// Suppress the banner and informational output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Input filename
    #[arg(short, long, global = true, value_name = "FILE")]
    input_file: Option<PathBuf>,

    /// Output filename (stdout if not specified)
    #[arg(short, long, global = true, value_name = "FILE")]
    output_file: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true)]
    format: Option<ReportFormat>,

    /// Path to configuration file
    #[arg(long, global = true, env = "SBOM_UTILITY_CONFIG")]
    config: Option<PathBuf>,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    fn to_flags(&self) -> Flags {
        Flags {
            trace: self.trace,
            debug: self.debug,
            quiet: self.quiet,
            no_color: self.no_color,
            input_file: self.input_file.clone(),
            output_file: self.output_file.clone(),
            output_format: self.format,
            config_file: self.config.clone(),
            ..Flags::from_environment(
                env!("CARGO_PKG_NAME"),
                env!("CARGO_BIN_NAME"),
                env!("CARGO_PKG_VERSION"),
            )
        }
    }
}

/// Arguments for the `validate` subcommand
#[derive(Args)]
struct ValidateArgs {
    /// Validate against this JSON schema file instead of a bundled schema
    #[arg(long, value_name = "FILE")]
    schema: Option<PathBuf>,

    /// Maximum number of violations to list (0 = unlimited)
    #[arg(long, value_name = "N")]
    max_errors: Option<usize>,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate input file against its declared SBOM schema
    #[command(long_about = "Validate input file against its declared SBOM schema, \
                            if detectable and supported.")]
    Validate(ValidateArgs),

    /// Display program, binary and version information
    #[command(long_about = "Display program, binary and version information in SemVer \
                            format (e.g., `<project> version <x.y.z>`).")]
    Version,

    /// List the supported SBOM schemas
    Schema,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show, discover, or describe configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (defaults + file + flags)
    Show,
    /// Print config file search paths and the discovered config file
    Path,
    /// Print a JSON Schema for the config file format
    Schema,
    /// Print an example config file
    Example,
}

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            std::process::exit(parse_error_exit_code(e.kind()));
        }
    };
    let flags = cli.to_flags();

    let loaded = match config::load_or_default(flags.config_file.as_deref()) {
        Ok(loaded) => loaded,
        Err(e) => {
            eprintln!("error: {e}");
            std::process::exit(exit_codes::ERROR);
        }
    };
    let mut config = loaded.config;
    config.merge_flags(&flags);

    let use_color = should_use_color(config.logging.no_color) && io::stderr().is_terminal();
    if let Err(e) = log::init_logging(config.logging.level, use_color) {
        eprintln!("warning: {e}");
    }
    if let Some((path, e)) = &loaded.skipped {
        tracing::warn!("Failed to load config from {}: {e}", path.display());
    }

    let code = match run(cli.command, &flags, &config, loaded.path) {
        Ok(code) => code,
        Err(e) => {
            tracing::error!("{e:#}");
            exit_codes::ERROR
        }
    };
    std::process::exit(code);
}

/// Exit code for a failed argument parse. Help and version requests succeed;
/// usage errors are ordinary errors, not unsupported documents.
const fn parse_error_exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => exit_codes::SUCCESS,
        _ => exit_codes::ERROR,
    }
}

#[tracing::instrument(level = "debug", skip_all, ret)]
fn run(
    command: Option<Commands>,
    flags: &Flags,
    config: &AppConfig,
    loaded_from: Option<PathBuf>,
) -> Result<i32> {
    match &loaded_from {
        Some(path) => tracing::debug!("loaded config from {}", path.display()),
        None => tracing::debug!("no config file found; using defaults"),
    }
    for problem in config.validate() {
        tracing::warn!("config {problem}");
    }

    if config.logging.level >= log::LogLevel::Debug {
        dump_startup_state(flags, config)?;
    }

    let Some(command) = command else {
        Cli::command().print_help()?;
        println!();
        return Ok(exit_codes::SUCCESS);
    };

    if !config.output.quiet && !matches!(command, Commands::Completions { .. }) {
        cli::write_welcome(&mut io::stderr().lock(), flags)?;
    }

    let ctx = CommandContext::new(flags, config);
    match command {
        Commands::Validate(args) => {
            let mut options = config.validation_options();
            if let Some(schema) = args.schema {
                options.schema_file = Some(schema);
            }
            if let Some(max_errors) = args.max_errors {
                options.max_errors = max_errors;
            }
            cli::run_validate(&ctx, &options)
        }

        Commands::Version => cli::run_version(&ctx).map(|()| exit_codes::SUCCESS),

        Commands::Schema => cli::run_schema(&ctx).map(|()| exit_codes::SUCCESS),

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "sbom-utility", &mut io::stdout());
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => {
            run_config(action, &ctx, loaded_from)?;
            Ok(exit_codes::SUCCESS)
        }
    }
}

/// Debug-level dumps of the raw arguments, flags and effective config.
fn dump_startup_state(flags: &Flags, config: &AppConfig) -> Result<()> {
    let mut err = io::stderr().lock();
    log::write_args(&mut err, std::env::args())?;
    log::write_struct(&mut err, "Flags", flags)?;
    tracing::debug!("{}", log::format_named_json("config", config));
    Ok(())
}

fn run_config(
    action: ConfigAction,
    ctx: &CommandContext<'_>,
    loaded_from: Option<PathBuf>,
) -> Result<()> {
    let target = ctx.output_target();
    match action {
        ConfigAction::Show => {
            match &loaded_from {
                Some(path) => eprintln!("# Loaded from: {}", path.display()),
                None => eprintln!("# No config file found; showing defaults"),
            }
            let yaml = serde_yaml::to_string(ctx.config).context("failed to serialize config")?;
            write_output(yaml.trim_end(), &target, ctx.quiet())
        }
        ConfigAction::Path => {
            let search_paths: [Option<String>; 3] = [
                std::env::current_dir()
                    .ok()
                    .map(|p| p.display().to_string()),
                ::dirs::config_dir().map(|p| p.join("sbom-utility").display().to_string()),
                ::dirs::home_dir().map(|p| p.display().to_string()),
            ];
            eprintln!("Config file search paths (in order):");
            for path in search_paths.into_iter().flatten() {
                eprintln!("  {path}");
            }
            eprintln!();
            match config::discover_config_file(ctx.flags.config_file.as_deref()) {
                Some(path) => write_output(&path.display().to_string(), &target, ctx.quiet()),
                None => {
                    eprintln!("No config file found.");
                    Ok(())
                }
            }
        }
        ConfigAction::Schema => {
            let schema = config::generate_json_schema()?;
            write_output(&schema, &target, ctx.quiet())
        }
        ConfigAction::Example => {
            let example = config::generate_example_config();
            write_output(example.trim_end(), &target, ctx.quiet())
        }
    }
}
