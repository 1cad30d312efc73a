// src/dag/strict.rs

//! Up-front validation used by [`CycleDetection::Strict`](crate::types::CycleDetection).
//!
//! Instead of counting dequeues, strict mode looks at everything queued
//! before the first task runs:
//! - every declared dependency must itself be queued,
//! - the dependency graph must have a topological order.

use std::collections::HashSet;

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;
use tracing::debug;

use crate::dag::descriptor::DependencySource;
use crate::dag::queue::PendingQueue;
use crate::errors::{BootseqError, Result};
use crate::types::TaskId;

/// Check the queued tasks for missing dependencies and cycles.
///
/// Missing dependencies are reported for the first offender in queue order,
/// dependencies in declaration order. Nothing is executed.
pub fn preflight<S>(queue: &PendingQueue, source: &S) -> Result<()>
where
    S: DependencySource + ?Sized,
{
    let queued: HashSet<&TaskId> = queue.iter().collect();

    let declared: Vec<(&TaskId, Vec<TaskId>)> = queue
        .iter()
        .map(|id| (id, source.dependencies_of(id)))
        .collect();

    for (id, deps) in declared.iter() {
        if let Some(missing) = deps.iter().find(|d| !queued.contains(d)) {
            return Err(BootseqError::MissingDependency {
                dependent: (*id).clone(),
                missing: missing.clone(),
            });
        }
    }

    // Edge direction: dependency -> dependent.
    let mut graph: DiGraphMap<&TaskId, ()> = DiGraphMap::new();
    for (id, deps) in declared.iter() {
        graph.add_node(*id);
        for dep in deps {
            graph.add_edge(dep, *id, ());
        }
    }

    match toposort(&graph, None) {
        Ok(order) => {
            debug!(tasks = order.len(), "strict preflight passed");
            Ok(())
        }
        Err(cycle) => Err(BootseqError::CircularDependency {
            task: cycle.node_id().clone(),
        }),
    }
}
