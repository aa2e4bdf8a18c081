//! Schema command handler.
//!
//! Lists the schemas bundled into this build.

use super::CommandContext;
use crate::pipeline::write_output;
use crate::schema::SUPPORTED_SCHEMAS;
use anyhow::Result;

/// Print the supported schema table.
#[tracing::instrument(level = "debug", skip_all, err)]
pub fn run_schema(ctx: &CommandContext<'_>) -> Result<()> {
    tracing::debug!("{} bundled schemas", SUPPORTED_SCHEMAS.len());
    let rendered = ctx.reporter().generate_schema_list(SUPPORTED_SCHEMAS)?;
    write_output(rendered.trim_end(), &ctx.output_target(), ctx.quiet())
}
