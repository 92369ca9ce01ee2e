//! Mode transition history tracking.
//!
//! Provides immutable tracking of cruise mode changes over a run,
//! following functional programming principles.

use super::mode::CruiseMode;
use serde::{Deserialize, Serialize};

/// Record of a single mode change.
///
/// `tick` is the zero-based index of the tick whose rule pass produced
/// the new mode.
///
/// # Example
///
/// ```rust
/// use cruise_control::core::{CruiseMode, ModeTransition};
///
/// let transition = ModeTransition {
///     from: CruiseMode::Disengaged,
///     to: CruiseMode::Cruising,
///     tick: 1,
/// };
/// assert!(transition.is_engagement());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModeTransition {
    /// The mode being left
    pub from: CruiseMode,
    /// The mode being entered
    pub to: CruiseMode,
    /// Tick at which the change was committed
    pub tick: usize,
}

impl ModeTransition {
    /// Whether this change switched cruise control on.
    pub fn is_engagement(&self) -> bool {
        !self.from.is_engaged() && self.to.is_engaged()
    }

    /// Whether this change switched cruise control off.
    pub fn is_disengagement(&self) -> bool {
        self.from.is_engaged() && !self.to.is_engaged()
    }
}

/// Ordered history of mode transitions.
///
/// History is immutable - the `record` method returns a new history
/// with the transition added.
///
/// # Example
///
/// ```rust
/// use cruise_control::core::{CruiseMode, ModeHistory, ModeTransition};
///
/// let history = ModeHistory::new()
///     .record(ModeTransition {
///         from: CruiseMode::Disengaged,
///         to: CruiseMode::Cruising,
///         tick: 0,
///     })
///     .record(ModeTransition {
///         from: CruiseMode::Cruising,
///         to: CruiseMode::ButtonAccelerating,
///         tick: 1,
///     });
///
/// let path = history.get_path();
/// assert_eq!(path.len(), 3); // Disengaged -> Cruising -> ButtonAccelerating
/// assert_eq!(history.engagements(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModeHistory {
    transitions: Vec<ModeTransition>,
}

impl ModeHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            transitions: Vec::new(),
        }
    }

    /// Record a transition, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the transition added.
    pub fn record(&self, transition: ModeTransition) -> Self {
        let mut transitions = self.transitions.clone();
        transitions.push(transition);
        Self { transitions }
    }

    /// Get the path of modes traversed.
    ///
    /// Returns modes in order: the mode before the first change, then the
    /// target of every change. Empty if nothing changed.
    pub fn get_path(&self) -> Vec<CruiseMode> {
        let mut path = Vec::new();
        if let Some(first) = self.transitions.first() {
            path.push(first.from);
        }
        for transition in &self.transitions {
            path.push(transition.to);
        }
        path
    }

    /// Number of times cruise control was switched on.
    pub fn engagements(&self) -> usize {
        self.transitions
            .iter()
            .filter(|t| t.is_engagement())
            .count()
    }

    /// Get all transitions.
    pub fn transitions(&self) -> &[ModeTransition] {
        &self.transitions
    }
}
