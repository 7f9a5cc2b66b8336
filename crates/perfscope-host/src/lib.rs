//! perfscope host library entry.
//!
//! Owns one `TimerRegistry` for the process and exposes it through a thin
//! HTTP surface (start/stop/list/clear) plus ops endpoints. Consumed by the
//! binary (`main.rs`) and by integration tests.

pub mod config;
pub mod host_state;
pub mod http;
pub mod obs;
pub mod ops;
pub mod router;
