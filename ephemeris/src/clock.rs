//! Simulated wall clock
//!
//! Tracks a simulated instant that advances faster than real time by the
//! selected speed multiplier. The host owns the clock and ticks it from a
//! single scheduling source; multiplier changes take effect from the next
//! advance.

use std::time::Duration;

use chrono::{DateTime, Utc};

use crate::timescale::SpeedMultiplier;

/// A simulated clock running at a selectable multiple of real time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimClock {
    now: DateTime<Utc>,
    multiplier: SpeedMultiplier,
}

impl SimClock {
    /// Start a clock at `start`, running at `multiplier`.
    pub fn new(start: DateTime<Utc>, multiplier: SpeedMultiplier) -> Self {
        Self {
            now: start,
            multiplier,
        }
    }

    /// Current simulated instant
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Current acceleration factor
    pub fn multiplier(&self) -> SpeedMultiplier {
        self.multiplier
    }

    /// Change the acceleration factor
    pub fn set_multiplier(&mut self, multiplier: SpeedMultiplier) {
        self.multiplier = multiplier;
    }

    /// Advance simulated time by `real_elapsed` of real time.
    pub fn advance(&mut self, real_elapsed: Duration) {
        let sim_ms = real_elapsed.as_secs_f64() * self.multiplier.factor() * 1e3;
        self.now += chrono::Duration::milliseconds(sim_ms.round() as i64);
    }
}
