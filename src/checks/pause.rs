//! Randomized pause intervals between check iterations.

use std::time::Duration;

use rand::Rng;

/// Inclusive duration interval a check pauses within between iterations.
///
/// Randomizing the pause jitters concurrent checks against each other so
/// that probes against the same infrastructure do not fire in lockstep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PauseRange {
    minimum: Duration,
    maximum: Duration,
}

impl PauseRange {
    /// Create a pause range. A `maximum` below `minimum` is clamped up to
    /// `minimum`, so `maximum >= minimum` always holds after construction.
    pub fn new(minimum: Duration, maximum: Duration) -> Self {
        Self {
            minimum,
            maximum: maximum.max(minimum),
        }
    }

    /// The lower bound.
    pub fn minimum(&self) -> Duration {
        self.minimum
    }

    /// The upper bound.
    pub fn maximum(&self) -> Duration {
        self.maximum
    }

    /// Draw a pause uniformly at random from `[minimum, maximum]`.
    pub fn sample(&self) -> Duration {
        let low = self.minimum.as_millis() as u64;
        let high = self.maximum.as_millis() as u64;
        Duration::from_millis(rand::thread_rng().gen_range(low..=high))
    }
}
