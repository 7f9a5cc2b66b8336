//! perfscope core: named start/stop timers and the metrics they produce.
//!
//! This crate owns the timer registry, the metric record, the clock seam, and
//! the error surface shared with the host. It carries no transport or runtime
//! dependencies so it can be embedded directly by any caller that wants to
//! time named operations.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Fallible paths surface as `ProfilerError`/`Result`.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod clock;
pub mod error;
pub mod global;
pub mod metric;
pub mod registry;
pub mod scoped;

pub use clock::{Clock, ManualClock, SystemClock};
/// Shared result type.
pub use error::{ErrorCode, ProfilerError, Result};
pub use metric::Metric;
pub use registry::TimerRegistry;
pub use scoped::ScopedTimer;
