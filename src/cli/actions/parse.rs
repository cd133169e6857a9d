//! Parse command implementation - Print a parsed statblock

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::cli::args::OutputFormat;
use crate::cli::context::Context;
use crate::model::ParsedStatblock;

/// Execute the parse action
pub fn execute(ctx: &Context, file: Option<&Path>, format: Option<OutputFormat>) -> Result<()> {
    let format = ctx.output_format(format)?;
    let report = ctx.parse_input(file)?;

    match format {
        OutputFormat::Toml => print!("{}", toml::to_string_pretty(&report.statblock)?),
        OutputFormat::Summary => print!(
            "{}",
            render_summary(&report.statblock, ctx.config.output.show_descriptions)
        ),
    }

    if report.has_warnings() {
        ctx.print_warning(&format!(
            "{} line(s) could not be attributed (run `statblock check` for details)",
            report.warnings.len()
        ));
    }

    Ok(())
}

/// Render a human-readable summary of a statblock
pub fn render_summary(sb: &ParsedStatblock, show_descriptions: bool) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}\n",
        sb.name.white().bold(),
        format!("(Tier {} {} {})", sb.tier, sb.subtype, sb.kind).dimmed()
    ));
    if let Some(description) = &sb.description {
        out.push_str(&format!("  {}\n", description.italic()));
    }

    out.push_str(&field("Difficulty", &sb.difficulty.to_string()));
    out.push_str(&field("Attack", &format!("{:+}", sb.attack)));
    if let Some(info) = &sb.attack_info {
        out.push_str(&field(
            "Weapon",
            &format!(
                "{}: {} | {} {}",
                info.name,
                info.range,
                info.formula(),
                info.damage_type
            ),
        ));
    }
    if let Some(experience) = &sb.experience {
        out.push_str(&field("Experience", experience));
    }
    for exp in &sb.experiences {
        out.push_str(&field("Experience", &format!("{} +{}", exp.name, exp.value)));
    }
    if let Some(motives) = &sb.motives_and_tactics {
        out.push_str(&field("Motives", motives));
    }

    if !sb.features.is_empty() {
        out.push_str(&format!("  {}\n", "Features".cyan()));
        for feature in &sb.features {
            out.push_str(&format!(
                "    {} - {}\n",
                feature.display_name().bold(),
                feature.feature_type
            ));
            if show_descriptions && !feature.description.is_empty() {
                out.push_str(&format!("      {}\n", feature.description.dimmed()));
            }
        }
    }

    out
}

fn field(label: &str, value: &str) -> String {
    format!("  {:<12} {}\n", label.cyan(), value)
}
