//! Shared host state.
//!
//! The registry is created here (or injected by the caller) and handed to
//! every handler through a cheap `Clone` handle.

use std::net::SocketAddr;
use std::sync::Arc;

use perfscope_core::error::Result;
use perfscope_core::TimerRegistry;

use crate::config::ProfilerConfig;
use crate::obs::metrics::HostMetrics;

#[derive(Clone)]
pub struct HostState {
    inner: Arc<HostStateInner>,
    registry: Arc<TimerRegistry>,
    metrics: Arc<HostMetrics>,
}

struct HostStateInner {
    cfg: ProfilerConfig,
    listen: SocketAddr,
}

impl HostState {
    /// Build host state with a fresh registry on the process clocks.
    pub fn new(cfg: ProfilerConfig) -> Result<Self> {
        Self::with_registry(cfg, Arc::new(TimerRegistry::new()))
    }

    /// Build host state around a registry owned by the caller.
    pub fn with_registry(cfg: ProfilerConfig, registry: Arc<TimerRegistry>) -> Result<Self> {
        cfg.validate()?;
        let listen = cfg.host.listen_addr()?;
        Ok(Self {
            inner: Arc::new(HostStateInner { cfg, listen }),
            registry,
            metrics: Arc::new(HostMetrics::default()),
        })
    }

    pub fn cfg(&self) -> &ProfilerConfig {
        &self.inner.cfg
    }

    pub fn listen_addr(&self) -> SocketAddr {
        self.inner.listen
    }

    pub fn strict_stop(&self) -> bool {
        self.inner.cfg.registry.strict_stop
    }

    pub fn registry(&self) -> Arc<TimerRegistry> {
        Arc::clone(&self.registry)
    }

    pub fn metrics(&self) -> Arc<HostMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Registry gauges appended to the ops metrics output.
    pub fn metrics_extra(&self) -> Vec<(&'static str, u64)> {
        vec![
            ("perfscope_timers_pending", self.registry.pending_count() as u64),
            ("perfscope_metrics_recorded", self.registry.len() as u64),
        ]
    }
}
