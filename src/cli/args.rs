//! CLI argument definitions using Clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "statblock")]
#[command(about = "Statblock importer - Parse plaintext adversary and environment statblocks")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Configuration file path (default: <config dir>/statblock/config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Log every line's disposition while parsing
    #[arg(short, long, global = true)]
    pub debug: bool,

    /// Log level: trace|debug|info|warn|error|off
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format: compact|pretty|json
    #[arg(long, global = true)]
    pub log_format: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Parse a statblock and print it
    #[command(visible_alias = "p")]
    Parse {
        /// Statblock text file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Output format
        #[arg(short, long)]
        format: Option<OutputFormat>,
    },

    /// Parse a statblock and write it as TOML
    Export {
        /// Statblock text file (stdin when omitted or `-`)
        file: Option<PathBuf>,
        /// Output file
        #[arg(short, long)]
        output: PathBuf,
    },

    /// Report lines that could not be attributed to any field
    Check {
        /// Statblock text file (stdin when omitted or `-`)
        file: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[value(alias = "s")]
    Summary,
    #[value(alias = "t")]
    Toml,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "summary" | "s" => Ok(OutputFormat::Summary),
            "toml" | "t" => Ok(OutputFormat::Toml),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
