//! Shared state for CLI actions

use anyhow::{Context as _, Result};
use colored::Colorize;
use std::path::Path;

use crate::cli::args::{Cli, OutputFormat};
use crate::config::load_config;
use crate::model::{Config, ParseReport};
use crate::parser::StatblockParser;
use crate::utils::path::read_input;

/// Resolved configuration and parser for one CLI invocation
pub struct Context {
    pub config: Config,
    pub parser: StatblockParser,
}

impl Context {
    /// Build the context from CLI arguments; `--debug` overrides the config file
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let mut config = load_config(cli.config.as_deref())?;
        if cli.debug {
            config.parser.debug = true;
        }
        Ok(Self::new(config))
    }

    pub fn new(config: Config) -> Self {
        let parser = StatblockParser::with_config(config.parser);
        Self { config, parser }
    }

    /// Log level: `--log-level`, then `--debug`, then `STATBLOCK_LOG_LEVEL`, then config
    pub fn log_level(&self, cli: &Cli) -> String {
        cli.log_level
            .clone()
            .or_else(|| cli.debug.then(|| "debug".to_string()))
            .or_else(|| std::env::var("STATBLOCK_LOG_LEVEL").ok())
            .unwrap_or_else(|| self.config.log.level.clone())
    }

    /// Log format: `--log-format`, then `STATBLOCK_LOG_FORMAT`, then config
    pub fn log_format(&self, cli: &Cli) -> String {
        cli.log_format
            .clone()
            .or_else(|| std::env::var("STATBLOCK_LOG_FORMAT").ok())
            .unwrap_or_else(|| self.config.log.format.clone())
    }

    /// Output format from the flag, falling back to the config file
    pub fn output_format(&self, flag: Option<OutputFormat>) -> Result<OutputFormat> {
        match flag {
            Some(format) => Ok(format),
            None => self
                .config
                .output
                .format
                .parse()
                .map_err(|e: String| anyhow::anyhow!(e)),
        }
    }

    /// Read and parse a statblock from a file or stdin
    pub fn parse_input(&self, path: Option<&Path>) -> Result<ParseReport> {
        let text = read_input(path)?;
        let source = path
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "stdin".to_string());
        self.parser
            .parse_report(&text)
            .with_context(|| format!("Failed to parse statblock from {}", source))
    }

    /// Print a success message
    pub fn print_success(&self, message: &str) {
        println!("{} {}", "✓".green(), message);
    }

    /// Print a warning message
    pub fn print_warning(&self, message: &str) {
        println!("{} {}", "⚠".yellow(), message);
    }

    /// Print an error message
    pub fn print_error(&self, message: &str) {
        eprintln!("{} {}", "✗".red(), message);
    }
}
