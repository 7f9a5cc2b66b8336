//! Top-level facade crate for perfscope.
//!
//! Re-exports the timer registry and the host library so users can depend on a single crate.

pub mod core {
    pub use perfscope_core::*;
}

pub mod host {
    pub use perfscope_host::*;
}
