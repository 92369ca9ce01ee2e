//! Cruise Control: a pulse-driven cruise control simulator
//!
//! Each tick the simulator reads sensor and dashboard state, runs the cruise
//! control's rule table once, and emits the resulting throttle command and
//! button indicators. The controller is a pure fold over plain values; the
//! sequencer and record codec form a thin shell around it.
//!
//! # Core Concepts
//!
//! - **TickRecord**: sparse per-tick input, where unspecified fields carry forward
//! - **VehicleSnapshot**: the fully resolved state of one tick
//! - **ControllerState**: the controller's private memory between ticks
//! - **CruiseController**: the ordered, guarded rule table
//! - **Sequencer**: threads records, snapshots and state through a run
//!
//! # Example
//!
//! ```rust
//! let snapshots = cruise_control::run_lines([
//!     "true 50.0 0.0 0.0 true false false false false",
//!     "- - - - - - true - -",
//!     "- - - - - - - true -",
//! ])
//! .unwrap();
//!
//! assert_eq!(snapshots.len(), 3);
//! assert!((snapshots[2].throttle_position - 1.144).abs() < 1e-9);
//! ```

pub mod controller;
pub mod core;
pub mod error;
pub mod record;
pub mod sequencer;
pub mod vehicle;

// Re-export commonly used types
pub use controller::{ControllerState, CruiseController};
pub use crate::core::{CruiseMode, ModeHistory};
pub use error::Error;
pub use sequencer::{Run, Sequencer};
pub use vehicle::{TickRecord, VehicleSnapshot};

/// Parse and run a list of record strings with the default controller.
///
/// Nothing is produced unless every line parses and the first record is
/// complete.
pub fn run_lines<I, S>(lines: I) -> Result<Vec<VehicleSnapshot>, Error>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let records = record::parse_records(lines)?;
    let run = Sequencer::default().run(&records)?;
    Ok(run.into_snapshots())
}
