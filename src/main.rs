//! statblock - Statblock Importer

use anyhow::Result;
use clap::Parser;

use statblock::cli::args::Commands;
use statblock::cli::{actions, Cli, Context};
use statblock::logging::init_logging;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let ctx = Context::from_cli(&cli)?;

    init_logging(Some(&ctx.log_level(&cli)), Some(&ctx.log_format(&cli)))
        .map_err(|e| anyhow::anyhow!(e))?;

    match &cli.command {
        Commands::Parse { file, format } => actions::parse::execute(&ctx, file.as_deref(), *format),
        Commands::Export { file, output } => {
            actions::export::execute(&ctx, file.as_deref(), output)
        }
        Commands::Check { file } => actions::check::execute(&ctx, file.as_deref()),
    }
}
