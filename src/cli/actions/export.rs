//! Export command implementation

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::context::Context;
use crate::utils::path::write_file;

/// Execute the export action
pub fn execute(ctx: &Context, file: Option<&Path>, output: &Path) -> Result<()> {
    let report = ctx.parse_input(file)?;
    let content = toml::to_string_pretty(&report.statblock)?;

    write_file(output, &content)?;

    ctx.print_success(&format!(
        "Exported {} with {} feature(s) to {}",
        report.statblock.name,
        report.statblock.features.len(),
        output.display().to_string().cyan()
    ));

    Ok(())
}
