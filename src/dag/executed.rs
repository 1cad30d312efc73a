// src/dag/executed.rs

use indexmap::IndexSet;

use crate::types::TaskId;

/// Insertion-ordered record of ids that ran to completion in one run.
///
/// Append-only. Re-executing an id that is already present keeps its first
/// position.
#[derive(Debug, Clone, Default)]
pub struct ExecutedSet {
    ids: IndexSet<TaskId>,
}

impl ExecutedSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, id: TaskId) {
        self.ids.insert(id);
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.ids.contains(id)
    }

    /// True if every id in `deps` has been executed (vacuously true if empty).
    pub fn contains_all(&self, deps: &[TaskId]) -> bool {
        deps.iter().all(|d| self.ids.contains(d))
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &TaskId> {
        self.ids.iter()
    }
}
