//! Clock seam for the registry.
//!
//! Durations are measured on the monotonic reading (`now`); the metric
//! timestamp comes from the wall reading (`wall`). Keeping the two apart means
//! a wall-clock adjustment mid-timing can never produce a negative duration.

use std::sync::{Mutex, PoisonError};
use std::time::{Duration, Instant, SystemTime};

/// Source of monotonic and wall-clock readings.
pub trait Clock: Send + Sync {
    /// Monotonic instant used for start/stop arithmetic.
    fn now(&self) -> Instant;
    /// Wall-clock instant stamped on recorded metrics.
    fn wall(&self) -> SystemTime;
}

/// Process clocks (`Instant::now` / `SystemTime::now`).
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// Deterministic clock that only moves when told to.
///
/// Both readings start at the moment of construction and advance together.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    wall_base: SystemTime,
    offset: Mutex<Duration>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            base: Instant::now(),
            wall_base: SystemTime::now(),
            offset: Mutex::new(Duration::ZERO),
        }
    }

    /// Move both readings forward by `d`.
    pub fn advance(&self, d: Duration) {
        let mut off = self.offset.lock().unwrap_or_else(PoisonError::into_inner);
        *off += d;
    }

    /// Total time advanced since construction.
    pub fn elapsed(&self) -> Duration {
        *self.offset.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.elapsed()
    }

    fn wall(&self) -> SystemTime {
        self.wall_base + self.elapsed()
    }
}
