//! The cruise control transition function.
//!
//! A [`CruiseController`] owns an immutable rule table. Each call to
//! [`CruiseController::pulse`] folds one tick's snapshot and the controller's
//! memory through every rule in order and hands both back. The controller
//! itself never changes, so a single instance can drive any number of
//! independent runs as long as each run threads its own [`ControllerState`].
//!
//! # Example
//!
//! ```rust
//! use cruise_control::controller::{ControllerState, CruiseController};
//! use cruise_control::vehicle::VehicleSnapshot;
//!
//! let controller = CruiseController::default();
//! let snapshot = VehicleSnapshot {
//!     engine_on: true,
//!     speed: 50.0,
//!     start_ccs: true,
//!     ..VehicleSnapshot::default()
//! };
//!
//! let (snapshot, state) = controller.pulse(snapshot, ControllerState::new());
//! assert!(state.is_active());
//! assert_eq!(snapshot.throttle_position, 1.0);
//! ```

pub mod builder;
pub mod error;
pub mod rules;
mod state;

pub use builder::ControllerBuilder;
pub use error::BuildError;
pub use rules::{Pulse, Rule};
pub use state::ControllerState;

use crate::vehicle::{TickRecord, VehicleSnapshot};
use rules::DEFAULT_ACTIVATION_SPEED;

/// Tunable parameters of the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ControllerConfig {
    /// Minimum speed (km/h) at which start-CCS engages.
    pub activation_speed: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            activation_speed: DEFAULT_ACTIVATION_SPEED,
        }
    }
}

/// Pure transition function over vehicle snapshots and controller memory.
#[derive(Debug)]
pub struct CruiseController {
    config: ControllerConfig,
    rules: Vec<Rule>,
}

impl Default for CruiseController {
    fn default() -> Self {
        Self::new(ControllerConfig::default())
    }
}

impl CruiseController {
    /// Create a controller without validating `config`.
    ///
    /// Prefer [`CruiseController::builder`] for values that come from users.
    pub fn new(config: ControllerConfig) -> Self {
        Self {
            config,
            rules: rules::rulebook(config.activation_speed),
        }
    }

    pub fn builder() -> ControllerBuilder {
        ControllerBuilder::new()
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// Names of the rules in the order they run.
    pub fn rule_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.rules.iter().map(Rule::name)
    }

    /// Run one full rule pass over a merged snapshot.
    ///
    /// Total over its inputs: every snapshot and state yields a resolved
    /// snapshot and state.
    pub fn pulse(
        &self,
        snapshot: VehicleSnapshot,
        state: ControllerState,
    ) -> (VehicleSnapshot, ControllerState) {
        let Pulse { snapshot, state } = self
            .rules
            .iter()
            .fold(Pulse { snapshot, state }, |pulse, rule| rule.apply(pulse));
        (snapshot, state)
    }

    /// Merge `record` onto `previous` and run one rule pass.
    pub fn step(
        &self,
        previous: &VehicleSnapshot,
        state: ControllerState,
        record: &TickRecord,
    ) -> (VehicleSnapshot, ControllerState) {
        self.pulse(previous.merge(record), state)
    }
}
