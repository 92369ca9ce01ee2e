//! Builder API for configuring a controller.

use crate::controller::error::BuildError;
use crate::controller::rules::DEFAULT_ACTIVATION_SPEED;
use crate::controller::{ControllerConfig, CruiseController};

/// Builder for [`CruiseController`].
///
/// # Example
///
/// ```rust
/// use cruise_control::controller::CruiseController;
///
/// let controller = CruiseController::builder()
///     .activation_speed(40.0)
///     .build()
///     .unwrap();
/// assert_eq!(controller.config().activation_speed, 40.0);
///
/// assert!(CruiseController::builder().activation_speed(-1.0).build().is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ControllerBuilder {
    activation_speed: f64,
}

impl Default for ControllerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ControllerBuilder {
    pub fn new() -> Self {
        Self {
            activation_speed: DEFAULT_ACTIVATION_SPEED,
        }
    }

    /// Set the minimum speed (km/h) at which start-CCS engages.
    pub fn activation_speed(mut self, kmh: f64) -> Self {
        self.activation_speed = kmh;
        self
    }

    /// Build the controller, validating the configuration.
    pub fn build(self) -> Result<CruiseController, BuildError> {
        if !self.activation_speed.is_finite() || self.activation_speed <= 0.0 {
            return Err(BuildError::InvalidActivationSpeed {
                value: self.activation_speed,
            });
        }

        Ok(CruiseController::new(ControllerConfig {
            activation_speed: self.activation_speed,
        }))
    }
}
