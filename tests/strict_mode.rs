// tests/strict_mode.rs

mod common;
use crate::common::{RecordingResolver, descriptors, init_tracing};

use bootseq::dag::{Scheduler, SchedulerConfig};
use bootseq::errors::BootseqError;
use bootseq::types::CycleDetection;

fn strict_scheduler(threshold: usize, order: &[&str]) -> Scheduler {
    let mut scheduler = Scheduler::with_config(SchedulerConfig {
        iteration_threshold: threshold,
        cycle_detection: CycleDetection::Strict,
    });
    for id in order {
        scheduler.register(*id);
    }
    scheduler
}

#[test]
fn strict_mode_drains_chains_the_threshold_would_reject() {
    init_tracing();

    let deps = descriptors(&[("A", &[]), ("B", &["A"]), ("C", &["B"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(1, &["C", "B", "A"]);

    let report = scheduler.run(&resolver, &deps).expect("strict run should succeed");

    assert_eq!(resolver.executed(), vec!["A", "B", "C"]);
    assert_eq!(report.iterations, 6);
}

#[test]
fn strict_mode_reports_missing_dependency_before_running_anything() {
    init_tracing();

    let deps = descriptors(&[("A", &[]), ("X", &["Y"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(500, &["A", "X"]);

    let result = scheduler.run(&resolver, &deps);

    match result {
        Err(BootseqError::MissingDependency { dependent, missing }) => {
            assert_eq!(dependent.as_str(), "X");
            assert_eq!(missing.as_str(), "Y");
        }
        other => panic!("Expected MissingDependency, got: {:?}", other),
    }
    assert!(resolver.executed().is_empty());
    assert_eq!(scheduler.pending().len(), 2);
}

#[test]
fn strict_mode_detects_a_real_cycle() {
    init_tracing();

    let deps = descriptors(&[("A", &[]), ("P", &["Q"]), ("Q", &["P"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(500, &["A", "P", "Q"]);

    let result = scheduler.run(&resolver, &deps);

    match result {
        Err(BootseqError::CircularDependency { task }) => {
            assert!(task.as_str() == "P" || task.as_str() == "Q");
        }
        other => panic!("Expected CircularDependency, got: {:?}", other),
    }
    assert!(resolver.executed().is_empty());
}

#[test]
fn strict_mode_treats_self_dependency_as_cycle() {
    let deps = descriptors(&[("A", &["A"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(500, &["A"]);

    let result = scheduler.run(&resolver, &deps);

    match result {
        Err(BootseqError::CircularDependency { task }) => assert_eq!(task.as_str(), "A"),
        other => panic!("Expected CircularDependency, got: {:?}", other),
    }
}

#[test]
fn strict_mode_keeps_duplicate_registrations() {
    let deps = descriptors(&[("A", &[]), ("B", &["A"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(500, &["B", "A", "A"]);

    scheduler.run(&resolver, &deps).expect("strict run should succeed");

    // B is requeued behind both copies of A.
    assert_eq!(resolver.executed(), vec!["A", "A", "B"]);
}

#[test]
fn strict_mode_reruns_duplicate_after_its_dependency() {
    let deps = descriptors(&[("A", &[]), ("B", &["A"])]);
    let resolver = RecordingResolver::new();
    let mut scheduler = strict_scheduler(500, &["B", "A", "B"]);

    let report = scheduler.run(&resolver, &deps).expect("strict run should succeed");

    assert_eq!(resolver.executed(), vec!["A", "B", "B"]);
    assert_eq!(report.iterations, 4);
}

#[test]
fn strict_and_threshold_modes_agree_on_order() {
    let deps = descriptors(&[
        ("config", &[]),
        ("logging", &["config"]),
        ("db", &["config", "logging"]),
        ("cache", &["config"]),
        ("http", &["db", "cache"]),
    ]);
    let order = ["http", "cache", "db", "logging", "config"];

    let mut threshold = Scheduler::new();
    for id in order {
        threshold.register(id);
    }
    let mut strict = strict_scheduler(500, &order);

    let a = threshold.run(&RecordingResolver::new(), &deps).expect("threshold run");
    let b = strict.run(&RecordingResolver::new(), &deps).expect("strict run");

    assert_eq!(a, b);
}

#[test]
fn strict_plan_fails_the_same_way_as_run() {
    let deps = descriptors(&[("P", &["Q"]), ("Q", &["P"])]);
    let scheduler = strict_scheduler(500, &["P", "Q"]);

    assert!(matches!(
        scheduler.plan(&deps),
        Err(BootseqError::CircularDependency { .. })
    ));
}
