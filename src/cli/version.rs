//! Version command handler.

use super::CommandContext;
use crate::pipeline::write_output;
use anyhow::Result;

/// Print `<project> version <x.y.z>`, or the same fields as JSON.
#[tracing::instrument(level = "debug", skip_all, err)]
pub fn run_version(ctx: &CommandContext<'_>) -> Result<()> {
    let rendered = ctx.reporter().generate_version(&ctx.flags.version_info())?;
    write_output(rendered.trim_end(), &ctx.output_target(), ctx.quiet())
}
