//! Textual input and output records.
//!
//! The line format is the simulator's only I/O contract: nine
//! whitespace-separated tokens per input line, ten per output line.

pub mod error;
pub mod format;
pub mod parse;

pub use error::{ParseError, TokenError};
pub use format::{format_json, format_text};
pub use parse::{parse_line, parse_records, UNSPECIFIED};
