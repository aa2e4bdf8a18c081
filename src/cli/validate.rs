//! Validate command handler.
//!
//! Implements the `validate` subcommand: checks the input document against
//! the schema for its declared or detected SBOM format.

use super::CommandContext;
use crate::error::OptionContext;
use crate::pipeline::{exit_codes, write_output};
use crate::validation::{ValidationOptions, validate_file};
use anyhow::Result;

/// Run the validate command, returning the process exit code.
///
/// A document in an unknown or unsupported format is reported and yields
/// [`exit_codes::UNSUPPORTED_FORMAT`] rather than an error.
#[tracing::instrument(level = "debug", skip_all, ret, err)]
pub fn run_validate(ctx: &CommandContext<'_>, options: &ValidationOptions) -> Result<i32> {
    let input = ctx
        .flags
        .input_file
        .as_deref()
        .context_none("no input file specified")?;

    let report = match validate_file(input, options) {
        Ok(report) => report,
        Err(e) if e.is_unsupported_format() => {
            tracing::error!("{:#}", anyhow::Error::from(e));
            return Ok(exit_codes::UNSUPPORTED_FORMAT);
        }
        Err(e) => return Err(e.into()),
    };

    let rendered = ctx.reporter().generate_validation_report(&report)?;
    write_output(rendered.trim_end(), &ctx.output_target(), ctx.quiet())?;

    tracing::info!("Document {}: valid=[{}]", report.input, report.valid);
    if report.valid {
        Ok(exit_codes::SUCCESS)
    } else {
        Ok(exit_codes::INVALID_DOCUMENT)
    }
}
