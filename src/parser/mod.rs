//! # Parser Module
//!
//! Turns plaintext statblocks into [`ParsedStatblock`] records.
//!
//! ## Architecture Overview
//!
//! ```text
//! parser/
//! ├── mod.rs          - This file: StatblockParser + line normalization
//! ├── patterns.rs     - Regex patterns (FEATURE_*, ATTACK_*, etc.)
//! ├── extractors.rs   - Stateless field extractors
//! └── machine.rs      - Section state machine (transition + patches)
//! ```
//!
//! ## Quick Reference
//!
//! | Section | Trigger | Extractors |
//! |---------|---------|------------|
//! | header | start of input | name/type, basic stats, description |
//! | experience | `Experience:` | experience line |
//! | features | `FEATURES` | strict header, flexible header |
//! | hp_stress | `HP & Stress` | none (observed only) |
//!
//! ## Usage
//!
//! ```rust,ignore
//! use statblock::parser::StatblockParser;
//!
//! let parser = StatblockParser::new();
//! let statblock = parser.parse(&text)?;
//! for feature in &statblock.features {
//!     println!("{} ({})", feature.display_name(), feature.feature_type);
//! }
//! ```

pub mod extractors;
pub mod machine;
pub mod patterns;

use tracing::{debug, debug_span, trace};

use crate::error::{ParseError, Result};
use crate::model::{ParseReport, ParseWarning, ParsedStatblock, ParserConfig};
use machine::{finish, transition, LineDisposition, ScanState, Section};

/// Statblock text parser.
///
/// Holds only its configuration; every call allocates its own record and
/// scan state, so one parser can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct StatblockParser {
    config: ParserConfig,
}

impl StatblockParser {
    /// Create a parser with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser with an explicit configuration.
    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse statblock text.
    ///
    /// # Errors
    ///
    /// - [`ParseError::EmptyInput`] when the text has no non-blank lines
    /// - [`ParseError::MissingName`] when no line was recognized as the name
    pub fn parse(&self, text: &str) -> Result<ParsedStatblock> {
        self.parse_report(text).map(|report| report.statblock)
    }

    /// Parse statblock text, keeping a warning for every dropped line.
    pub fn parse_report(&self, text: &str) -> Result<ParseReport> {
        let span = debug_span!("parse_statblock", input_len = text.len());
        let _enter = span.enter();

        let lines = normalize_lines(text);
        if lines.is_empty() {
            debug!("Input has no non-blank lines");
            return Err(ParseError::EmptyInput);
        }

        let mut record = ParsedStatblock::new();
        let mut state = ScanState::new();
        let mut warnings = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            let line_number = index + 1;
            let section = state.section;
            let step = transition(state, &record, line);

            self.log_disposition(line_number, line, section, step.disposition);
            if step.disposition.is_dropped() {
                warnings.push(ParseWarning::new(
                    line_number,
                    format!("unrecognized line in {} section", section),
                    *line,
                ));
            }

            for patch in step.patches {
                patch.apply(&mut record);
            }
            state = step.state;
        }

        for patch in finish(state) {
            patch.apply(&mut record);
        }

        if !record.has_name() {
            debug!(line_count = lines.len(), "No name line recognized");
            return Err(ParseError::MissingName {
                line_count: lines.len(),
            });
        }

        debug!(
            name = %record.name,
            tier = record.tier,
            features = record.features.len(),
            dropped = warnings.len(),
            "Parsed statblock"
        );

        let mut report = ParseReport::new(record);
        for warning in warnings {
            report.add_warning(warning);
        }
        Ok(report)
    }

    fn log_disposition(
        &self,
        line_number: usize,
        line: &str,
        section: Section,
        disposition: LineDisposition,
    ) {
        if self.config.debug || disposition.is_dropped() {
            debug!(line_number, %section, ?disposition, text = line, "line");
        } else {
            trace!(line_number, %section, ?disposition, text = line, "line");
        }
    }
}

/// Split into trimmed lines, dropping blank ones.
pub fn normalize_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect()
}

/// Parse with the default configuration.
pub fn parse_statblock(text: &str) -> Result<ParsedStatblock> {
    StatblockParser::new().parse(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_lines() {
        let lines = normalize_lines("  A  \n\n\t\nB\r\n  C");
        assert_eq!(lines, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(parse_statblock(""), Err(ParseError::EmptyInput));
        assert_eq!(parse_statblock("  \n\t\n"), Err(ParseError::EmptyInput));
    }

    #[test]
    fn test_missing_name() {
        let err = parse_statblock("Difficulty: 14\nAttack: +3").unwrap_err();
        assert_eq!(err, ParseError::MissingName { line_count: 2 });
    }

    #[test]
    fn test_warnings_for_dropped_lines() {
        let parser = StatblockParser::with_config(ParserConfig::debug());
        let report = parser
            .parse_report("GIANT RAT\nA rat.\nAnother prose line.\nFEATURES\nstray")
            .unwrap();
        assert_eq!(report.warnings.len(), 2);
        assert_eq!(report.warnings[0].line_number, 3);
        assert!(report.warnings[0].message.contains("header"));
        assert_eq!(report.warnings[1].raw_line, "stray");
        assert!(report.warnings[1].message.contains("features"));
    }

    #[test]
    fn test_parser_is_reusable() {
        let parser = StatblockParser::new();
        let first = parser.parse("GIANT RAT\nT1 Minion").unwrap();
        let second = parser.parse("GIANT RAT\nT1 Minion").unwrap();
        assert_eq!(first, second);
        assert_eq!(first.subtype, "minion");
    }
}
