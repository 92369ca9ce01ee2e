//! Core building blocks shared by the controller and the sequencer.
//!
//! This module contains the pure pieces of the simulator:
//! - Observable cruise modes via [`CruiseMode`]
//! - Guard predicates for rule firing
//! - Immutable history of mode changes
//!
//! Nothing in this module performs I/O.

mod guard;
mod history;
mod mode;

pub use guard::Guard;
pub use history::{ModeHistory, ModeTransition};
pub use mode::CruiseMode;
