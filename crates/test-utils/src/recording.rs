use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use anyhow::bail;
use bootseq::dag::{DescriptorTable, TaskDescriptor};
use bootseq::errors::{BootseqError, Result};
use bootseq::exec::{Resolver, StartupTask, from_fn};
use bootseq::types::TaskId;

/// A fake resolver that:
/// - records which tasks were resolved and which actually executed
/// - can be told to fail a task's `execute` or to refuse resolving it.
#[derive(Debug, Clone, Default)]
pub struct RecordingResolver {
    executed: Arc<Mutex<Vec<String>>>,
    resolved: Arc<Mutex<Vec<String>>>,
    failing: HashSet<TaskId>,
    unresolvable: HashSet<TaskId>,
}

impl RecordingResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// `execute` for this task returns an error.
    pub fn failing_on(mut self, id: &str) -> Self {
        self.failing.insert(TaskId::from(id));
        self
    }

    /// `resolve` for this task returns `Unresolvable`.
    pub fn unresolvable(mut self, id: &str) -> Self {
        self.unresolvable.insert(TaskId::from(id));
        self
    }

    /// Task names in execution order (successful executions only).
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }

    /// Task names in resolution order.
    pub fn resolved(&self) -> Vec<String> {
        self.resolved.lock().unwrap().clone()
    }
}

impl Resolver for RecordingResolver {
    fn resolve(&self, id: &TaskId) -> Result<Box<dyn StartupTask>> {
        if self.unresolvable.contains(id) {
            return Err(BootseqError::Unresolvable {
                task: id.clone(),
                reason: "refused by RecordingResolver".to_string(),
            });
        }
        self.resolved.lock().unwrap().push(id.to_string());

        let executed = Arc::clone(&self.executed);
        let fail = self.failing.contains(id);
        let name = id.to_string();

        Ok(Box::new(from_fn(move || {
            if fail {
                bail!("task '{}' failed on purpose", name);
            }
            executed.lock().unwrap().push(name.clone());
            Ok(())
        })))
    }
}

/// Build a descriptor table from `(task, deps)` pairs.
pub fn descriptors(pairs: &[(&str, &[&str])]) -> DescriptorTable {
    pairs.iter()
        .map(|(id, deps)| {
            deps.iter()
                .fold(TaskDescriptor::new(*id), |d, dep| d.after(*dep))
        })
        .collect()
}
