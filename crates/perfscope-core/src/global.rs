//! Process-wide registry for call sites with no contextual access.
//!
//! Prefer constructing a `TimerRegistry` at the composition root and passing
//! it down. This handle exists for scripting-style entry points that can only
//! reach a global.

use once_cell::sync::Lazy;

use crate::metric::Metric;
use crate::registry::TimerRegistry;

static GLOBAL: Lazy<TimerRegistry> = Lazy::new(|| {
    tracing::debug!("global timer registry created");
    TimerRegistry::new()
});

/// The shared registry. Created on first use and kept until process exit.
pub fn global() -> &'static TimerRegistry {
    &GLOBAL
}

/// Start `profiler_name` on the global registry.
///
/// `function_name` is descriptive only; it is logged but not part of the key.
pub fn profile_function(function_name: &str, profiler_name: &str) {
    tracing::debug!(function = %function_name, label = %profiler_name, "profile function");
    global().start(profiler_name);
}

/// Stop `profiler_name` on the global registry.
pub fn end_profile_function(profiler_name: &str) -> Option<Metric> {
    global().stop(profiler_name)
}
