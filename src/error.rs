//! Crate-level error type.

use crate::record::ParseError;
use crate::sequencer::SequenceError;
use thiserror::Error;

/// Any error a simulation run can end with.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
