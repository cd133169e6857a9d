//! Logging setup
//!
//! The parser reports each line's disposition through `tracing`. Nothing is
//! printed unless a subscriber is installed; the CLI installs one here.
//!
//! # Environment Variables
//!
//! - `STATBLOCK_LOG_LEVEL`: log level (trace|debug|info|warn|error|off)
//! - `STATBLOCK_LOG_FORMAT`: log format (compact|pretty|json)
//! - `RUST_LOG`: standard `EnvFilter` directives, takes precedence
//!
//! Per-line diagnostics are emitted at `debug` when the parser runs with
//! `debug = true`, and at `trace` otherwise:
//!
//! ```bash
//! RUST_LOG="statblock::parser=trace" statblock parse burrower.txt
//! ```

use std::str::FromStr;

use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

fn resolve_level(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var("STATBLOCK_LOG_LEVEL").ok())
        .unwrap_or_else(|| "warn".to_string())
}

/// Initialize the tracing subscriber on stderr.
///
/// `level` and `format` fall back to `STATBLOCK_LOG_LEVEL` /
/// `STATBLOCK_LOG_FORMAT`, then to `warn` / `compact`. `RUST_LOG` wins over
/// `level` when set.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let log_level = resolve_level(level);

    let log_format = format
        .map(str::to_string)
        .or_else(|| std::env::var("STATBLOCK_LOG_FORMAT").ok())
        .unwrap_or_else(|| "compact".to_string());

    let filter = if log_level == "off" {
        EnvFilter::new("off")
    } else {
        EnvFilter::try_from_default_env()
            .or_else(|_| EnvFilter::try_new(&log_level))
            .unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    let format = LogFormat::from_str(&log_format)?;

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(false)
                        .with_span_events(FmtSpan::NONE)
                        .compact(),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    fmt::Layer::default()
                        .with_writer(std::io::stderr)
                        .with_target(true)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_parsing() {
        assert_eq!(LogFormat::from_str("compact").unwrap(), LogFormat::Compact);
        assert_eq!(LogFormat::from_str("PRETTY").unwrap(), LogFormat::Pretty);
        assert_eq!(LogFormat::from_str("json").unwrap(), LogFormat::Json);
        assert!(LogFormat::from_str("xml").is_err());
    }

    #[test]
    fn test_explicit_level_wins() {
        assert_eq!(resolve_level(Some("debug")), "debug");
    }
}
