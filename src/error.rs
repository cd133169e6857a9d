//! Parse error types

use thiserror::Error;

/// Errors raised by [`crate::parser::StatblockParser::parse`]
///
/// Lines that cannot be classified are never errors; they are dropped and
/// reported as [`crate::model::ParseWarning`]s.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Input reduced to zero non-blank lines
    #[error("statblock text is empty")]
    EmptyInput,

    /// A full pass completed without recognizing a name line
    #[error("no statblock name found in {line_count} line(s)")]
    MissingName { line_count: usize },
}

pub type Result<T> = std::result::Result<T, ParseError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        assert_eq!(ParseError::EmptyInput.to_string(), "statblock text is empty");
        let msg = ParseError::MissingName { line_count: 2 }.to_string();
        assert!(msg.contains("no statblock name"));
        assert!(msg.contains("2 line"));
    }
}
