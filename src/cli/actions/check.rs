//! Check command implementation - List unattributed lines

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::context::Context;

/// Execute the check action
pub fn execute(ctx: &Context, file: Option<&Path>) -> Result<()> {
    let report = match ctx.parse_input(file) {
        Ok(report) => report,
        Err(e) => {
            ctx.print_error(&format!("{:#}", e));
            anyhow::bail!("Statblock check failed");
        }
    };

    if !report.has_warnings() {
        ctx.print_success(&format!(
            "{}: every line was recognized",
            report.statblock.name
        ));
        return Ok(());
    }

    ctx.print_warning(&format!(
        "{}: {} line(s) dropped",
        report.statblock.name,
        report.warnings.len()
    ));
    for warning in &report.warnings {
        println!(
            "  {} {} {}",
            format!("L{}", warning.line_number).yellow(),
            warning.raw_line,
            format!("({})", warning.message).dimmed()
        );
    }

    Ok(())
}
