//! Guard predicates for controlling rule firing.
//!
//! Guards are pure boolean functions that decide whether a rule applies to
//! the value it is looking at. They keep the pre-condition of each rule
//! separate from its effect.

use std::fmt;

/// Pure predicate that determines if a rule can fire.
///
/// # Example
///
/// ```rust
/// use cruise_control::core::Guard;
///
/// let over_limit = Guard::new(|speed: &f64| *speed >= 50.0);
///
/// assert!(over_limit.check(&50.0));
/// assert!(over_limit.check(&72.5));
/// assert!(!over_limit.check(&49.9));
/// ```
pub struct Guard<T> {
    predicate: Box<dyn Fn(&T) -> bool + Send + Sync>,
}

impl<T> Guard<T> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be pure (deterministic, no side effects) and
    /// thread-safe (Send + Sync).
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&T) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Box::new(predicate),
        }
    }

    /// Check if the guard admits this value.
    pub fn check(&self, value: &T) -> bool {
        (self.predicate)(value)
    }
}

impl<T> fmt::Debug for Guard<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Guard").finish_non_exhaustive()
    }
}
