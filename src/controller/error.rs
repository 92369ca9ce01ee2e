//! Errors raised while configuring a controller.

use thiserror::Error;

/// Errors that can occur when building a [`CruiseController`](super::CruiseController).
#[derive(Debug, Clone, Error, PartialEq)]
pub enum BuildError {
    #[error("Activation speed must be a finite number above zero, got {value}")]
    InvalidActivationSpeed { value: f64 },
}
