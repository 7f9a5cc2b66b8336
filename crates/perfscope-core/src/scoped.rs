//! RAII timer guard.

use crate::metric::Metric;
use crate::registry::TimerRegistry;

/// Starts a label on creation and stops it on drop.
///
/// If the label is restarted or the registry is cleared while the guard is
/// alive, the registry's overwrite/no-op rules apply on drop as usual.
#[must_use = "the timer stops as soon as the guard is dropped"]
pub struct ScopedTimer<'a> {
    registry: &'a TimerRegistry,
    name: Option<String>,
}

impl<'a> ScopedTimer<'a> {
    pub(crate) fn new(registry: &'a TimerRegistry, name: &str) -> Self {
        registry.start(name);
        Self {
            registry,
            name: Some(name.to_string()),
        }
    }

    /// Stop now and return the recorded metric.
    pub fn finish(mut self) -> Option<Metric> {
        let name = self.name.take()?;
        self.registry.stop(&name)
    }
}

impl Drop for ScopedTimer<'_> {
    fn drop(&mut self) {
        if let Some(name) = self.name.take() {
            self.registry.stop(&name);
        }
    }
}
