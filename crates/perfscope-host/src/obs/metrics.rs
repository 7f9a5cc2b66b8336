//! Host request counters.
//!
//! Labelled counters backed by `DashMap`. Labels are flattened into sorted key
//! vectors so rendering order within a series is deterministic.

use dashmap::DashMap;
use std::fmt::Write;
use std::sync::atomic::{AtomicU64, Ordering};

/// Helper to escape label values.
fn escape_label(v: &str) -> String {
    v.replace('\\', "\\\\").replace('"', "\\\"").replace('\n', "\\n")
}

fn label_key(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    let mut key: Vec<(String, String)> = labels
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();
    key.sort();
    key
}

#[derive(Default)]
pub struct CounterVec {
    map: DashMap<Vec<(String, String)>, AtomicU64>,
}

impl CounterVec {
    /// Increment by 1.
    pub fn inc(&self, labels: &[(&str, &str)]) {
        self.add(labels, 1);
    }

    pub fn add(&self, labels: &[(&str, &str)], v: u64) {
        let counter = self
            .map
            .entry(label_key(labels))
            .or_insert_with(|| AtomicU64::new(0));
        counter.fetch_add(v, Ordering::Relaxed);
    }

    /// Current value for an exact label set (0 if never incremented).
    pub fn get(&self, labels: &[(&str, &str)]) -> u64 {
        self.map
            .get(&label_key(labels))
            .map(|c| c.load(Ordering::Relaxed))
            .unwrap_or(0)
    }

    /// Render in Prometheus text exposition format.
    fn render(&self, name: &str, out: &mut String) {
        let _ = writeln!(out, "# TYPE {} counter", name);
        let mut rows: Vec<(String, u64)> = self
            .map
            .iter()
            .map(|r| {
                let label_str = r
                    .key()
                    .iter()
                    .map(|(k, v)| format!("{}=\"{}\"", k, escape_label(v)))
                    .collect::<Vec<_>>()
                    .join(",");
                (label_str, r.value().load(Ordering::Relaxed))
            })
            .collect();
        rows.sort();
        for (label_str, val) in rows {
            let _ = writeln!(out, "{}{{{}}} {}", name, label_str, val);
        }
    }
}

#[derive(Default)]
pub struct HostMetrics {
    /// Labels: `route`, `outcome`.
    pub http_requests: CounterVec,
}

impl HostMetrics {
    pub fn request(&self, route: &str, outcome: &str) {
        self.http_requests.inc(&[("route", route), ("outcome", outcome)]);
    }

    /// Render all counters plus caller-supplied gauges.
    pub fn render(&self, extra: &[(&str, u64)]) -> String {
        let mut out = String::new();
        self.http_requests.render("perfscope_http_requests_total", &mut out);
        for (k, v) in extra {
            let _ = writeln!(out, "# TYPE {} gauge\n{} {}", k, k, v);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_order_does_not_split_series() {
        let c = CounterVec::default();
        c.inc(&[("route", "stop"), ("outcome", "ok")]);
        c.inc(&[("outcome", "ok"), ("route", "stop")]);
        assert_eq!(c.get(&[("route", "stop"), ("outcome", "ok")]), 2);
    }

    #[test]
    fn render_includes_counters_and_gauges() {
        let m = HostMetrics::default();
        m.request("start", "ok");
        let out = m.render(&[("perfscope_timers_pending", 3)]);
        assert!(out.contains("# TYPE perfscope_http_requests_total counter"));
        assert!(out.contains("perfscope_http_requests_total{outcome=\"ok\",route=\"start\"} 1"));
        assert!(out.contains("perfscope_timers_pending 3"));
    }
}
