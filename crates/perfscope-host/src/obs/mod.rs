//! Lightweight in-process counters for the host itself.
//!
//! Stored as atomics and rendered by the `/metrics` ops handler.

pub mod metrics;
