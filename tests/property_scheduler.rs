// tests/property_scheduler.rs

mod common;
use crate::common::RecordingResolver;

use std::collections::{HashMap, HashSet};

use proptest::prelude::*;

use bootseq::dag::{DescriptorTable, Scheduler, SchedulerConfig, TaskDescriptor};
use bootseq::types::CycleDetection;

/// A random acyclic graph plus a random registration order.
///
/// Acyclicity comes from only letting task N depend on tasks 0..N-1.
fn dag_strategy(max_tasks: usize) -> impl Strategy<Value = (DescriptorTable, Vec<String>)> {
    (1..=max_tasks).prop_flat_map(|num_tasks| {
        let deps_strat = proptest::collection::vec(
            proptest::collection::vec(any::<usize>(), 0..num_tasks),
            num_tasks,
        );
        let order_strat = Just((0..num_tasks).collect::<Vec<_>>()).prop_shuffle();

        (deps_strat, order_strat).prop_map(move |(raw_deps, order)| {
            let mut table = DescriptorTable::new();
            for (i, potential_deps) in raw_deps.into_iter().enumerate() {
                let mut descriptor = TaskDescriptor::new(format!("task_{}", i));

                // Sanitize dependencies: only allow deps < i
                let mut valid_deps = HashSet::new();
                for dep_idx in potential_deps {
                    if i > 0 {
                        valid_deps.insert(dep_idx % i);
                    }
                }
                for dep_idx in valid_deps {
                    descriptor = descriptor.after(format!("task_{}", dep_idx));
                }
                table.insert(descriptor);
            }

            let order = order.into_iter().map(|i| format!("task_{}", i)).collect();
            (table, order)
        })
    })
}

fn scheduler_for(order: &[String], cycle_detection: CycleDetection) -> Scheduler {
    let mut scheduler = Scheduler::with_config(SchedulerConfig {
        // Each full pass over an acyclic queue runs at least one task, so
        // n * (n + 1) / 2 dequeues always suffice.
        iteration_threshold: 10_000,
        cycle_detection,
    });
    for id in order {
        scheduler.register(id.as_str());
    }
    scheduler
}

proptest! {
    #[test]
    fn every_dependency_runs_before_its_dependents((table, order) in dag_strategy(12)) {
        let resolver = RecordingResolver::new();
        let mut scheduler = scheduler_for(&order, CycleDetection::Threshold);

        let report = scheduler.run(&resolver, &table);
        prop_assert!(report.is_ok(), "acyclic graph failed: {:?}", report);

        let executed = resolver.executed();
        prop_assert_eq!(executed.len(), order.len());

        let position: HashMap<&str, usize> = executed
            .iter()
            .enumerate()
            .map(|(i, name)| (name.as_str(), i))
            .collect();
        prop_assert_eq!(position.len(), order.len(), "a task ran more than once");

        for name in &order {
            let id = bootseq::types::TaskId::from(name.as_str());
            for dep in table.get(&id).unwrap_or(&[]) {
                prop_assert!(
                    position[dep.as_str()] < position[name.as_str()],
                    "{} ran before its dependency {}",
                    name,
                    dep
                );
            }
        }
    }

    #[test]
    fn strict_mode_matches_threshold_mode((table, order) in dag_strategy(12)) {
        let mut threshold = scheduler_for(&order, CycleDetection::Threshold);
        let mut strict = scheduler_for(&order, CycleDetection::Strict);

        let a = threshold.run(&RecordingResolver::new(), &table);
        let b = strict.run(&RecordingResolver::new(), &table);

        prop_assert!(a.is_ok() && b.is_ok());
        prop_assert_eq!(a.unwrap(), b.unwrap());
    }
}
