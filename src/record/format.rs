//! Rendering of output records.

use crate::vehicle::VehicleSnapshot;
use std::fmt;

/// Renders the nine resolved input fields followed by the throttle position.
///
/// Numbers use six decimal places.
///
/// # Example
///
/// ```rust
/// use cruise_control::vehicle::VehicleSnapshot;
///
/// let snapshot = VehicleSnapshot {
///     engine_on: true,
///     speed: 50.0,
///     start_ccs: true,
///     throttle_position: 1.0,
///     ..VehicleSnapshot::default()
/// };
/// assert_eq!(
///     snapshot.to_string(),
///     "true 50.000000 0.000000 0.000000 true false false false false 1.000000"
/// );
/// ```
impl fmt::Display for VehicleSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {:.6} {:.6} {:.6} {} {} {} {} {} {:.6}",
            self.engine_on,
            self.speed,
            self.brake_position,
            self.accelerator_position,
            self.start_ccs,
            self.stop_ccs,
            self.start_accelerating,
            self.stop_accelerating,
            self.resume,
            self.throttle_position,
        )
    }
}

/// One text line per snapshot, each terminated by a newline.
pub fn format_text(snapshots: &[VehicleSnapshot]) -> String {
    snapshots
        .iter()
        .map(|snapshot| format!("{snapshot}\n"))
        .collect()
}

/// One JSON object per snapshot, each terminated by a newline.
pub fn format_json(snapshots: &[VehicleSnapshot]) -> serde_json::Result<String> {
    let mut out = String::new();
    for snapshot in snapshots {
        out.push_str(&serde_json::to_string(snapshot)?);
        out.push('\n');
    }
    Ok(out)
}
