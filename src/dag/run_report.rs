// src/dag/run_report.rs

//! Result type for a completed scheduler run.

use crate::types::TaskId;

/// Summary of a successful [`Scheduler::run`](crate::dag::Scheduler::run).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunReport {
    /// Every execution in the order it happened. An id registered twice
    /// shows up twice.
    pub executed: Vec<TaskId>,
    /// Number of dequeues the drain loop performed.
    pub iterations: usize,
}

impl RunReport {
    /// Execution order as plain strings, handy for assertions and printing.
    pub fn order(&self) -> Vec<&str> {
        self.executed.iter().map(|id| id.as_str()).collect()
    }
}
