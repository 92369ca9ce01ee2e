//! Observable cruise control modes.
//!
//! A mode is a label derived from the controller's memory after each tick.
//! It carries no data of its own, so it is cheap to compare, log and record
//! in a [`ModeHistory`](super::ModeHistory).

use serde::{Deserialize, Serialize};
use std::fmt;

/// What the cruise control is doing at the end of a tick.
///
/// # Example
///
/// ```rust
/// use cruise_control::core::CruiseMode;
///
/// assert!(!CruiseMode::Disengaged.is_engaged());
/// assert!(CruiseMode::PedalOverride.is_engaged());
/// assert_eq!(CruiseMode::ButtonAccelerating.name(), "ButtonAccelerating");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub enum CruiseMode {
    /// Throttle follows the accelerator pedal.
    #[default]
    Disengaged,
    /// Throttle holds the recorded set-point.
    Cruising,
    /// Driver is pushing the throttle above the set-point with the pedal.
    PedalOverride,
    /// Driver is ramping speed with the start-accelerating button.
    ButtonAccelerating,
}

impl CruiseMode {
    /// Get the mode's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Disengaged => "Disengaged",
            Self::Cruising => "Cruising",
            Self::PedalOverride => "PedalOverride",
            Self::ButtonAccelerating => "ButtonAccelerating",
        }
    }

    /// Check if cruise control is engaged in this mode.
    ///
    /// Every mode except [`CruiseMode::Disengaged`] is engaged.
    pub fn is_engaged(&self) -> bool {
        !matches!(self, Self::Disengaged)
    }
}

impl fmt::Display for CruiseMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
