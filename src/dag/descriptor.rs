// src/dag/descriptor.rs

//! Task descriptors and the dependency metadata seam.

use std::collections::HashMap;

use crate::types::TaskId;

/// Identity of a task plus the ids it must run after.
///
/// Dependency order is irrelevant and duplicates are harmless.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDescriptor {
    pub id: TaskId,
    pub dependencies: Vec<TaskId>,
}

impl TaskDescriptor {
    pub fn new(id: impl Into<TaskId>) -> Self {
        Self {
            id: id.into(),
            dependencies: Vec::new(),
        }
    }

    /// Add a dependency (builder style).
    pub fn after(mut self, dep: impl Into<TaskId>) -> Self {
        self.dependencies.push(dep.into());
        self
    }
}

/// Source of declared dependencies for a task id.
///
/// The scheduler calls this once per dequeue and expects the same answer for
/// the same id for the whole run. Unknown ids have no dependencies.
pub trait DependencySource {
    fn dependencies_of(&self, id: &TaskId) -> Vec<TaskId>;
}

/// Plain id -> dependencies table.
#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    deps: HashMap<TaskId, Vec<TaskId>>,
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a descriptor, replacing any previous one with the same id.
    pub fn insert(&mut self, descriptor: TaskDescriptor) {
        self.deps.insert(descriptor.id, descriptor.dependencies);
    }

    pub fn get(&self, id: &TaskId) -> Option<&[TaskId]> {
        self.deps.get(id).map(|d| d.as_slice())
    }

    pub fn len(&self) -> usize {
        self.deps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.deps.is_empty()
    }
}

impl FromIterator<TaskDescriptor> for DescriptorTable {
    fn from_iter<I: IntoIterator<Item = TaskDescriptor>>(iter: I) -> Self {
        let mut table = DescriptorTable::new();
        for descriptor in iter {
            table.insert(descriptor);
        }
        table
    }
}

impl DependencySource for DescriptorTable {
    fn dependencies_of(&self, id: &TaskId) -> Vec<TaskId> {
        self.get(id).map(|d| d.to_vec()).unwrap_or_default()
    }
}
