//! Drives the controller over an ordered series of tick records.
//!
//! The sequencer is the imperative shell around the pure controller: it
//! merges each record onto the previous snapshot, runs one rule pass, and
//! keeps every resulting snapshot. Mode changes are logged and collected in
//! a [`ModeHistory`].

pub mod error;

pub use error::SequenceError;

use crate::controller::{ControllerState, CruiseController};
use crate::core::{CruiseMode, ModeHistory, ModeTransition};
use crate::vehicle::{TickRecord, VehicleSnapshot};
use tracing::{debug, info, warn};

/// Everything a completed run produced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Run {
    snapshots: Vec<VehicleSnapshot>,
    final_state: ControllerState,
    history: ModeHistory,
}

impl Run {
    /// One snapshot per input record, in input order.
    pub fn snapshots(&self) -> &[VehicleSnapshot] {
        &self.snapshots
    }

    pub fn into_snapshots(self) -> Vec<VehicleSnapshot> {
        self.snapshots
    }

    pub fn final_snapshot(&self) -> Option<&VehicleSnapshot> {
        self.snapshots.last()
    }

    /// Controller memory after the last tick.
    pub fn final_state(&self) -> &ControllerState {
        &self.final_state
    }

    pub fn history(&self) -> &ModeHistory {
        &self.history
    }
}

/// Folds tick records through a [`CruiseController`].
///
/// # Example
///
/// ```rust
/// use cruise_control::record::parse_records;
/// use cruise_control::sequencer::Sequencer;
///
/// let records = parse_records([
///     "true 50.0 0.0 0.0 false false false false false",
///     "- - - - true - - - -",
///     "- - 0.1 - - - - - -",
/// ])
/// .unwrap();
///
/// let run = Sequencer::default().run(&records).unwrap();
/// assert_eq!(run.snapshots().len(), 3);
/// assert_eq!(run.snapshots()[1].throttle_position, 1.0);
/// assert_eq!(run.final_snapshot().unwrap().throttle_position, 0.0);
/// assert_eq!(run.history().engagements(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Sequencer {
    controller: CruiseController,
}

impl Sequencer {
    pub fn new(controller: CruiseController) -> Self {
        Self { controller }
    }

    pub fn controller(&self) -> &CruiseController {
        &self.controller
    }

    /// Run every record, returning exactly one snapshot per record.
    ///
    /// The first record must be fully specified. An empty input yields an
    /// empty run.
    pub fn run(&self, records: &[TickRecord]) -> Result<Run, SequenceError> {
        let Some(first) = records.first() else {
            return Ok(Run::default());
        };

        let initial = VehicleSnapshot::from_complete(first).ok_or_else(|| {
            let missing = first.missing_fields();
            warn!(?missing, "first record is not fully specified");
            SequenceError::IncompleteInitialRecord { missing }
        })?;

        let mut previous = initial;
        let mut state = ControllerState::new();
        let mut mode = CruiseMode::Disengaged;
        let mut history = ModeHistory::new();
        let mut snapshots = Vec::with_capacity(records.len());

        for (tick, record) in records.iter().enumerate() {
            let (snapshot, next_state) = self.controller.step(&previous, state, record);

            let next_mode = next_state.mode(&snapshot);
            if next_mode != mode {
                info!(tick, from = %mode, to = %next_mode, "cruise mode changed");
                history = history.record(ModeTransition {
                    from: mode,
                    to: next_mode,
                    tick,
                });
                mode = next_mode;
            }
            debug!(
                tick,
                speed = snapshot.speed,
                throttle = snapshot.throttle_position,
                "tick committed"
            );

            snapshots.push(snapshot);
            previous = snapshot;
            state = next_state;
        }

        Ok(Run {
            snapshots,
            final_state: state,
            history,
        })
    }
}
