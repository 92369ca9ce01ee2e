//! Input record error types.

use thiserror::Error;

/// A single token that could not be read
#[derive(Debug, Clone, Error, PartialEq)]
pub enum TokenError {
    #[error("`{field}` expects `true`, `false` or `-`, found `{token}`")]
    InvalidFlag { field: &'static str, token: String },

    #[error("`{field}` expects a non-negative number or `-`, found `{token}`")]
    InvalidMeasure { field: &'static str, token: String },
}

/// Errors that can occur when parsing input records
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ParseError {
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// Every bad token on the line, in field order
    #[error("line {line}: {}", join(errors))]
    InvalidTokens { line: usize, errors: Vec<TokenError> },
}

impl ParseError {
    /// 1-based source line the error was found on.
    pub fn line(&self) -> usize {
        match self {
            Self::FieldCount { line, .. } | Self::InvalidTokens { line, .. } => *line,
        }
    }
}

fn join(errors: &[TokenError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
