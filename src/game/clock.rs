use std::time::Duration;

use crate::error::ConfigError;

/// Converts continuous frame time into discrete movement ticks.
///
/// Each due tick consumes exactly one interval from the accumulator, so the
/// remainder carries over into the next frame and the cadence does not drift
/// under a varying frame rate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovementClock {
    interval: Duration,
    accumulated: Duration,
}

impl MovementClock {
    pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(200);

    pub fn new(interval: Duration) -> Result<Self, ConfigError> {
        if interval.is_zero() {
            return Err(ConfigError::ZeroTickInterval);
        }

        Ok(Self {
            interval,
            accumulated: Duration::ZERO,
        })
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Time accumulated toward the next tick
    pub fn accumulated(&self) -> Duration {
        self.accumulated
    }

    /// Add elapsed frame time to the accumulator
    pub fn accumulate(&mut self, elapsed: Duration) {
        self.accumulated += elapsed;
    }

    /// Consume one tick if one is due.
    ///
    /// Call repeatedly until it returns false; a single long frame can make
    /// several ticks due.
    pub fn consume_tick(&mut self) -> bool {
        if self.accumulated >= self.interval {
            self.accumulated -= self.interval;
            true
        } else {
            false
        }
    }

    /// Normalized progress toward the next tick, in `[0, 1)`
    pub fn progress(&self) -> f32 {
        let ratio = self.accumulated.as_secs_f32() / self.interval.as_secs_f32();
        ratio.clamp(0.0, 1.0 - f32::EPSILON)
    }

    pub fn reset(&mut self) {
        self.accumulated = Duration::ZERO;
    }
}

impl Default for MovementClock {
    fn default() -> Self {
        Self {
            interval: Self::DEFAULT_INTERVAL,
            accumulated: Duration::ZERO,
        }
    }
}
