//! Observable contract of `TimerRegistry`.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;
use std::thread;
use std::time::Duration;

use perfscope_core::{ErrorCode, ManualClock, TimerRegistry};

fn manual() -> (Arc<ManualClock>, TimerRegistry) {
    let clock = Arc::new(ManualClock::new());
    let reg = TimerRegistry::with_clock(clock.clone());
    (clock, reg)
}

#[test]
fn start_then_stop_records_one_metric() {
    let reg = TimerRegistry::new();
    reg.start("a");
    reg.stop("a");

    let metrics = reg.get_metrics();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].name, "a");
    assert!(metrics[0].duration_ms >= 0.0);
}

#[test]
fn stop_without_start_is_noop() {
    let (clock, reg) = manual();
    reg.start("x");
    clock.advance(Duration::from_millis(1));
    reg.stop("x");
    let before = reg.get_metrics();

    assert!(reg.stop("never-started").is_none());
    assert!(reg.stop("x").is_none(), "second stop must not record again");
    assert_eq!(reg.get_metrics(), before);
}

#[test]
fn restart_measures_from_second_start() {
    let (clock, reg) = manual();
    reg.start("a");
    clock.advance(Duration::from_millis(100));
    reg.start("a");
    clock.advance(Duration::from_millis(40));
    reg.stop("a");

    let metrics = reg.get_metrics();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].duration_ms, 40.0);
    assert_eq!(reg.pending_count(), 0);
}

#[test]
fn clear_drops_history_and_pending() {
    let (clock, reg) = manual();
    reg.start("done");
    reg.stop("done");
    reg.start("inflight");
    clock.advance(Duration::from_millis(10));

    reg.clear();
    assert!(reg.get_metrics().is_empty());
    assert!(reg.stop("inflight").is_none());
    assert!(reg.is_empty());
}

#[test]
fn history_keeps_stop_order() {
    let reg = TimerRegistry::new();
    reg.start("a");
    reg.stop("a");
    reg.start("b");
    reg.stop("b");

    let names: Vec<_> = reg.get_metrics().into_iter().map(|m| m.name).collect();
    assert_eq!(names, ["a", "b"]);
}

#[test]
fn interleaved_labels_follow_stop_order() {
    let reg = TimerRegistry::new();
    reg.start("outer");
    reg.start("inner");
    reg.stop("inner");
    reg.stop("outer");

    let names: Vec<_> = reg.get_metrics().into_iter().map(|m| m.name).collect();
    assert_eq!(names, ["inner", "outer"]);
}

#[test]
fn load_scenario() {
    let (clock, reg) = manual();
    reg.start("load");
    clock.advance(Duration::from_millis(250));
    let m = reg.stop("load").expect("metric recorded");

    assert_eq!(m.name, "load");
    assert_eq!(m.duration_ms, 250.0);
    assert_eq!(reg.get_metrics(), vec![m]);

    reg.clear();
    assert!(reg.get_metrics().is_empty());
}

#[test]
fn pending_timers_are_not_reported() {
    let reg = TimerRegistry::new();
    reg.start("slow");
    assert!(reg.get_metrics().is_empty());
    assert!(reg.is_pending("slow"));
}

#[test]
fn try_stop_reports_unknown_label() {
    let reg = TimerRegistry::new();
    let err = reg.try_stop("ghost").expect_err("must fail");
    assert_eq!(err.code(), ErrorCode::UnknownLabel);
    assert_eq!(err.code().as_str(), "UNKNOWN_LABEL");
    assert!(reg.get_metrics().is_empty());

    reg.start("real");
    assert_eq!(reg.try_stop("real").unwrap().name, "real");
}

#[test]
fn scoped_guard_stops_on_drop() {
    let (clock, reg) = manual();
    {
        let _t = reg.scoped("block");
        clock.advance(Duration::from_millis(7));
        assert!(reg.is_pending("block"));
    }
    let metrics = reg.get_metrics();
    assert_eq!(metrics.len(), 1);
    assert_eq!(metrics[0].duration_ms, 7.0);
}

#[test]
fn scoped_finish_records_once() {
    let (clock, reg) = manual();
    let t = reg.scoped("explicit");
    clock.advance(Duration::from_millis(3));
    let m = t.finish().unwrap();
    assert_eq!(m.duration_ms, 3.0);
    assert_eq!(reg.len(), 1);
}

#[test]
fn time_closure_returns_value() {
    let (clock, reg) = manual();
    let out = reg.time("work", || {
        clock.advance(Duration::from_millis(12));
        21 * 2
    });
    assert_eq!(out, 42);
    assert_eq!(reg.get_metrics()[0].duration_ms, 12.0);
}

#[test]
fn concurrent_unique_labels_lose_nothing() {
    const N: usize = 16;
    let reg = Arc::new(TimerRegistry::new());
    let sleep = Duration::from_millis(20);

    let handles: Vec<_> = (0..N)
        .map(|i| {
            let reg = Arc::clone(&reg);
            thread::spawn(move || {
                let label = format!("job-{i}");
                reg.start(&label);
                thread::sleep(sleep);
                reg.stop(&label).expect("own label is pending")
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }

    let metrics = reg.get_metrics();
    assert_eq!(metrics.len(), N);
    assert_eq!(reg.pending_count(), 0);
    for i in 0..N {
        let label = format!("job-{i}");
        let m = metrics.iter().find(|m| m.name == label).expect("label recorded");
        assert!(m.duration_ms >= 20.0, "{label} took {}ms", m.duration_ms);
    }
}

#[test]
fn metric_json_shape() {
    let (clock, reg) = manual();
    reg.start("io");
    clock.advance(Duration::from_millis(5));
    let m = reg.stop("io").unwrap();

    let v = serde_json::to_value(&m).unwrap();
    assert_eq!(v["name"], "io");
    assert_eq!(v["duration_ms"].as_f64(), Some(5.0));
    assert!(v["timestamp_ms"].as_u64().is_some());
}
