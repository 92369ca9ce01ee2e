//! Per-tick vehicle data: sparse input records and resolved snapshots.
//!
//! A [`TickRecord`] is what arrives each tick: any of its nine fields may be
//! left unspecified. A [`VehicleSnapshot`] is the fully resolved view the
//! controller works on, produced by merging a record onto the previous
//! snapshot.

use serde::{Deserialize, Serialize};

/// Input field names, in wire order.
pub const FIELD_NAMES: [&str; 9] = [
    "engine_on",
    "speed",
    "brake_position",
    "accelerator_position",
    "start_ccs",
    "stop_ccs",
    "start_accelerating",
    "stop_accelerating",
    "resume",
];

/// Sparse input for one tick. `None` means "carry forward".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TickRecord {
    pub engine_on: Option<bool>,
    pub speed: Option<f64>,
    pub brake_position: Option<f64>,
    pub accelerator_position: Option<f64>,
    pub start_ccs: Option<bool>,
    pub stop_ccs: Option<bool>,
    pub start_accelerating: Option<bool>,
    pub stop_accelerating: Option<bool>,
    pub resume: Option<bool>,
}

impl TickRecord {
    /// A record that carries every field forward.
    pub fn unspecified() -> Self {
        Self::default()
    }

    /// Names of the fields this record leaves unspecified, in wire order.
    pub fn missing_fields(&self) -> Vec<&'static str> {
        let specified = [
            self.engine_on.is_some(),
            self.speed.is_some(),
            self.brake_position.is_some(),
            self.accelerator_position.is_some(),
            self.start_ccs.is_some(),
            self.stop_ccs.is_some(),
            self.start_accelerating.is_some(),
            self.stop_accelerating.is_some(),
            self.resume.is_some(),
        ];
        FIELD_NAMES
            .iter()
            .zip(specified)
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    }

    /// True when every field is specified.
    pub fn is_complete(&self) -> bool {
        self.missing_fields().is_empty()
    }
}

/// Fully resolved vehicle state for one tick.
///
/// `throttle_position` is the controller's output; the other fields are
/// sensor readings and dashboard button levels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct VehicleSnapshot {
    pub engine_on: bool,
    pub speed: f64,
    pub brake_position: f64,
    pub accelerator_position: f64,
    pub start_ccs: bool,
    pub stop_ccs: bool,
    pub start_accelerating: bool,
    pub stop_accelerating: bool,
    pub resume: bool,
    pub throttle_position: f64,
}

impl VehicleSnapshot {
    /// Build the first snapshot of a run from a fully specified record.
    ///
    /// Returns `None` if any field is unspecified. The throttle starts at 0.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cruise_control::vehicle::{TickRecord, VehicleSnapshot};
    ///
    /// assert!(VehicleSnapshot::from_complete(&TickRecord::unspecified()).is_none());
    /// ```
    pub fn from_complete(record: &TickRecord) -> Option<Self> {
        Some(Self {
            engine_on: record.engine_on?,
            speed: record.speed?,
            brake_position: record.brake_position?,
            accelerator_position: record.accelerator_position?,
            start_ccs: record.start_ccs?,
            stop_ccs: record.stop_ccs?,
            start_accelerating: record.start_accelerating?,
            stop_accelerating: record.stop_accelerating?,
            resume: record.resume?,
            throttle_position: 0.0,
        })
    }

    /// Overlay a record onto this snapshot.
    ///
    /// Specified fields replace the current value, unspecified fields carry
    /// forward. The throttle position always carries forward.
    ///
    /// # Example
    ///
    /// ```rust
    /// use cruise_control::vehicle::{TickRecord, VehicleSnapshot};
    ///
    /// let previous = VehicleSnapshot {
    ///     engine_on: true,
    ///     speed: 50.0,
    ///     ..VehicleSnapshot::default()
    /// };
    /// let record = TickRecord {
    ///     brake_position: Some(0.1),
    ///     ..TickRecord::unspecified()
    /// };
    ///
    /// let merged = previous.merge(&record);
    /// assert_eq!(merged.speed, 50.0);
    /// assert_eq!(merged.brake_position, 0.1);
    /// ```
    pub fn merge(&self, record: &TickRecord) -> Self {
        Self {
            engine_on: record.engine_on.unwrap_or(self.engine_on),
            speed: record.speed.unwrap_or(self.speed),
            brake_position: record.brake_position.unwrap_or(self.brake_position),
            accelerator_position: record
                .accelerator_position
                .unwrap_or(self.accelerator_position),
            start_ccs: record.start_ccs.unwrap_or(self.start_ccs),
            stop_ccs: record.stop_ccs.unwrap_or(self.stop_ccs),
            start_accelerating: record
                .start_accelerating
                .unwrap_or(self.start_accelerating),
            stop_accelerating: record.stop_accelerating.unwrap_or(self.stop_accelerating),
            resume: record.resume.unwrap_or(self.resume),
            throttle_position: self.throttle_position,
        }
    }

    pub fn brake_on(&self) -> bool {
        self.brake_position > 0.0
    }

    pub fn accelerator_on(&self) -> bool {
        self.accelerator_position > 0.0
    }

    /// Release all five dashboard buttons.
    pub fn release_buttons(self) -> Self {
        Self {
            start_ccs: false,
            resume: false,
            ..self.release_control_buttons()
        }
    }

    /// Release every dashboard button except resume.
    pub fn release_control_buttons(self) -> Self {
        Self {
            start_ccs: false,
            stop_ccs: false,
            start_accelerating: false,
            stop_accelerating: false,
            ..self
        }
    }
}
