//! Parsing of textual input records.
//!
//! A line holds nine whitespace-separated tokens in [`FIELD_NAMES`] order.
//! `-` leaves a field unspecified. Tokens are validated with `Validation`
//! so a line with several bad tokens reports all of them at once.

use crate::record::error::{ParseError, TokenError};
use crate::vehicle::{TickRecord, FIELD_NAMES};
use stillwater::validation::Validation;
use stillwater::NonEmptyVec;

/// Token that leaves a field unspecified.
pub const UNSPECIFIED: &str = "-";

#[derive(Clone, Copy, Debug, PartialEq)]
enum FieldKind {
    Flag,
    Measure,
}

const FIELD_KINDS: [FieldKind; 9] = [
    FieldKind::Flag,
    FieldKind::Measure,
    FieldKind::Measure,
    FieldKind::Measure,
    FieldKind::Flag,
    FieldKind::Flag,
    FieldKind::Flag,
    FieldKind::Flag,
    FieldKind::Flag,
];

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token {
    Unspecified,
    Flag(bool),
    Measure(f64),
}

impl Token {
    fn flag(self) -> Option<bool> {
        match self {
            Self::Flag(value) => Some(value),
            _ => None,
        }
    }

    fn measure(self) -> Option<f64> {
        match self {
            Self::Measure(value) => Some(value),
            _ => None,
        }
    }
}

fn parse_token(
    field: &'static str,
    kind: FieldKind,
    raw: &str,
) -> Validation<Token, NonEmptyVec<TokenError>> {
    if raw == UNSPECIFIED {
        return Validation::success(Token::Unspecified);
    }

    match kind {
        FieldKind::Flag => match raw.parse::<bool>() {
            Ok(value) => Validation::success(Token::Flag(value)),
            Err(_) => Validation::fail(TokenError::InvalidFlag {
                field,
                token: raw.to_string(),
            }),
        },
        FieldKind::Measure => match raw.parse::<f64>() {
            // `-0.0` is accepted and stored as `0.0`.
            Ok(value) if value.is_finite() && value >= 0.0 => {
                Validation::success(Token::Measure(value + 0.0))
            }
            _ => Validation::fail(TokenError::InvalidMeasure {
                field,
                token: raw.to_string(),
            }),
        },
    }
}

/// Parse one input line.
///
/// `line` is the 1-based line number used in errors.
///
/// # Example
///
/// ```rust
/// use cruise_control::record::parse_line;
///
/// let record = parse_line(1, "- 50.0 - - true - - - -").unwrap();
/// assert_eq!(record.speed, Some(50.0));
/// assert_eq!(record.start_ccs, Some(true));
/// assert_eq!(record.engine_on, None);
///
/// assert!(parse_line(2, "true 50.0").is_err());
/// ```
pub fn parse_line(line: usize, text: &str) -> Result<TickRecord, ParseError> {
    let raw: Vec<&str> = text.split_whitespace().collect();
    if raw.len() != FIELD_NAMES.len() {
        return Err(ParseError::FieldCount {
            line,
            expected: FIELD_NAMES.len(),
            found: raw.len(),
        });
    }

    let tokens: Vec<_> = FIELD_NAMES
        .into_iter()
        .zip(FIELD_KINDS)
        .zip(raw)
        .map(|((field, kind), raw)| parse_token(field, kind, raw))
        .collect();

    match Validation::all_vec(tokens) {
        Validation::Success(tokens) => Ok(assemble(&tokens)),
        Validation::Failure(errors) => Err(ParseError::InvalidTokens {
            line,
            errors: errors.iter().cloned().collect(),
        }),
    }
}

fn assemble(tokens: &[Token]) -> TickRecord {
    TickRecord {
        engine_on: tokens[0].flag(),
        speed: tokens[1].measure(),
        brake_position: tokens[2].measure(),
        accelerator_position: tokens[3].measure(),
        start_ccs: tokens[4].flag(),
        stop_ccs: tokens[5].flag(),
        start_accelerating: tokens[6].flag(),
        stop_accelerating: tokens[7].flag(),
        resume: tokens[8].flag(),
    }
}

/// Parse a sequence of input lines, stopping at the first bad line.
///
/// Blank lines are skipped; line numbers in errors still count them.
pub fn parse_records<I, S>(lines: I) -> Result<Vec<TickRecord>, ParseError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    lines
        .into_iter()
        .enumerate()
        .filter(|(_, text)| !text.as_ref().trim().is_empty())
        .map(|(index, text)| parse_line(index + 1, text.as_ref()))
        .collect()
}
