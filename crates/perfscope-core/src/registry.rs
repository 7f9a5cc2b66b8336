//! Timer registry: pending starts keyed by label, plus the metric history.
//!
//! Per label the state machine is `ABSENT -(start)-> PENDING -(stop)-> ABSENT`,
//! and a `Metric` is appended on every `PENDING -> ABSENT` transition.
//! Starting a label that is already pending resets its start instant; the
//! earlier in-flight timing is discarded.
//!
//! Both maps sit behind one mutex so `stop` moves an entry from `pending` to
//! `history` atomically with respect to `clear` and other callers.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Instant;

use crate::clock::{Clock, SystemClock};
use crate::error::{ProfilerError, Result};
use crate::metric::Metric;
use crate::scoped::ScopedTimer;

#[derive(Default)]
struct RegistryState {
    pending: HashMap<String, Instant>,
    history: Vec<Metric>,
}

/// Named start/stop timers and the metrics they produced.
pub struct TimerRegistry {
    clock: Arc<dyn Clock>,
    state: Mutex<RegistryState>,
}

impl TimerRegistry {
    /// Registry backed by the process clocks.
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            clock,
            state: Mutex::new(RegistryState::default()),
        }
    }

    // Recover from poisoning: every mutation leaves the maps consistent.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Begin timing `name`, overwriting any pending start for the same label.
    pub fn start(&self, name: &str) {
        let now = self.clock.now();
        let replaced = self.lock().pending.insert(name.to_string(), now).is_some();
        if replaced {
            tracing::debug!(label = %name, "timer restarted; previous start discarded");
        } else {
            tracing::debug!(label = %name, "timer started");
        }
    }

    /// Stop timing `name` and record a metric.
    ///
    /// Best-effort: a label with no pending start is a silent no-op and
    /// returns `None`.
    pub fn stop(&self, name: &str) -> Option<Metric> {
        let metric = {
            let mut st = self.lock();
            let Some(started) = st.pending.remove(name) else {
                drop(st);
                tracing::debug!(label = %name, "stop for label with no pending start");
                return None;
            };
            let now = self.clock.now();
            let metric = Metric::new(name, now.saturating_duration_since(started), self.clock.wall());
            st.history.push(metric.clone());
            metric
        };
        tracing::info!(label = %name, duration_ms = metric.duration_ms, "timer completed");
        Some(metric)
    }

    /// Like `stop`, but an unknown label is an error.
    pub fn try_stop(&self, name: &str) -> Result<Metric> {
        self.stop(name)
            .ok_or_else(|| ProfilerError::UnknownLabel(name.to_string()))
    }

    /// Snapshot of the history in recorded order. Pending timers are excluded.
    pub fn get_metrics(&self) -> Vec<Metric> {
        self.lock().history.clone()
    }

    /// Drop every pending timer and every recorded metric.
    pub fn clear(&self) {
        let mut st = self.lock();
        st.pending.clear();
        st.history.clear();
    }

    pub fn is_pending(&self, name: &str) -> bool {
        self.lock().pending.contains_key(name)
    }

    pub fn pending_count(&self) -> usize {
        self.lock().pending.len()
    }

    /// Number of recorded metrics.
    pub fn len(&self) -> usize {
        self.lock().history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().history.is_empty()
    }

    /// Start `name` now and stop it when the returned guard is dropped.
    pub fn scoped<'a>(&'a self, name: &str) -> ScopedTimer<'a> {
        ScopedTimer::new(self, name)
    }

    /// Run `f` between `start(name)` and `stop(name)`.
    pub fn time<R>(&self, name: &str, f: impl FnOnce() -> R) -> R {
        let _guard = self.scoped(name);
        f()
    }
}

impl Default for TimerRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for TimerRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let st = self.lock();
        f.debug_struct("TimerRegistry")
            .field("pending", &st.pending.len())
            .field("history", &st.history.len())
            .finish()
    }
}
