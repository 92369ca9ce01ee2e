//! Sequencer error types.

use thiserror::Error;

/// Errors that can occur while sequencing a run
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SequenceError {
    /// The first record has nothing to carry forward from
    #[error("First record must specify every field (missing: {})", missing.join(", "))]
    IncompleteInitialRecord { missing: Vec<&'static str> },
}
