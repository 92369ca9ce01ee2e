//! The controller's private memory between ticks.

use crate::core::CruiseMode;
use crate::vehicle::VehicleSnapshot;
use serde::{Deserialize, Serialize};

/// Memory the cruise control keeps across ticks.
///
/// None of this appears in the input or output records. A fresh value is
/// disengaged with every recorded throttle at zero. Only the controller's
/// rules change it; callers just thread it from one tick to the next.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ControllerState {
    pub(crate) is_active: bool,
    /// Engaged by resume rather than the start-CCS gate.
    pub(crate) resumed: bool,
    pub(crate) recorded_cruise_throttle: f64,
    pub(crate) has_cruised: bool,
    pub(crate) accelerating_by_pedal: bool,
    pub(crate) pre_pedal_throttle: f64,
    pub(crate) last_button_accel_throttle: f64,
}

impl ControllerState {
    /// State at the start of a simulation.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether cruising is currently engaged.
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Whether the current engagement came from resume.
    ///
    /// Resumed cruising holds while the gate stays open even though the
    /// start-CCS indicator is off.
    pub fn resumed(&self) -> bool {
        self.resumed
    }

    /// The cruise set-point, restored on resume.
    pub fn recorded_cruise_throttle(&self) -> f64 {
        self.recorded_cruise_throttle
    }

    /// Whether cruising has been engaged at any point in this run.
    pub fn has_cruised(&self) -> bool {
        self.has_cruised
    }

    pub fn accelerating_by_pedal(&self) -> bool {
        self.accelerating_by_pedal
    }

    /// Throttle to restore once the accelerator pedal is released.
    pub fn pre_pedal_throttle(&self) -> f64 {
        self.pre_pedal_throttle
    }

    pub fn last_button_accel_throttle(&self) -> f64 {
        self.last_button_accel_throttle
    }

    /// Observable mode for this state paired with the tick's snapshot.
    pub fn mode(&self, snapshot: &VehicleSnapshot) -> CruiseMode {
        if !self.is_active {
            CruiseMode::Disengaged
        } else if snapshot.start_accelerating {
            CruiseMode::ButtonAccelerating
        } else if self.accelerating_by_pedal {
            CruiseMode::PedalOverride
        } else {
            CruiseMode::Cruising
        }
    }

    /// Leave cruising. The set-point survives so resume can restore it.
    pub(crate) fn disengage(self) -> Self {
        Self {
            is_active: false,
            resumed: false,
            accelerating_by_pedal: false,
            last_button_accel_throttle: 0.0,
            ..self
        }
    }
}
