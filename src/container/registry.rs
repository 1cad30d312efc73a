// src/container/registry.rs

use std::collections::HashMap;
use std::fmt;

use tracing::debug;

use crate::container::module::{EntryKind, TaskEntry, TaskFactory, TaskModule};
use crate::dag::{DependencySource, TaskDescriptor};
use crate::errors::{BootseqError, Result};
use crate::exec::{Resolver, StartupTask};
use crate::types::TaskId;

/// Container of task entries keyed by id.
///
/// Serves both as the scheduler's [`Resolver`] (build an instance through the
/// entry's factory) and as its [`DependencySource`] (descriptor lookup).
/// Registering an id again replaces the earlier entry.
#[derive(Clone, Default)]
pub struct TaskRegistry {
    entries: HashMap<TaskId, TaskEntry>,
}

impl TaskRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding every entry of every module, in order.
    pub fn from_modules(modules: &[TaskModule]) -> Self {
        let mut registry = Self::new();
        for module in modules {
            registry.register_module(module);
        }
        registry
    }

    pub fn register_module(&mut self, module: &TaskModule) {
        debug!(
            module = module.name(),
            entries = module.entries().len(),
            "registering module"
        );
        for entry in module.entries() {
            self.register_entry(entry.clone());
        }
    }

    pub fn register_entry(&mut self, entry: TaskEntry) {
        if self.entries.contains_key(entry.id()) {
            debug!(task = %entry.id(), "replacing existing registry entry");
        }
        self.entries.insert(entry.id().clone(), entry);
    }

    pub fn register(&mut self, descriptor: TaskDescriptor, factory: TaskFactory) {
        self.register_entry(TaskEntry::concrete(descriptor, factory));
    }

    pub fn get(&self, id: &TaskId) -> Option<&TaskEntry> {
        self.entries.get(id)
    }

    pub fn contains(&self, id: &TaskId) -> bool {
        self.entries.contains_key(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Resolver for TaskRegistry {
    fn resolve(&self, id: &TaskId) -> Result<Box<dyn StartupTask>> {
        let unresolvable = |reason: String| BootseqError::Unresolvable {
            task: id.clone(),
            reason,
        };

        let entry = self
            .entries
            .get(id)
            .ok_or_else(|| unresolvable("not registered in container".to_string()))?;

        if entry.kind == EntryKind::Abstract {
            return Err(unresolvable("abstract entries cannot be instantiated".to_string()));
        }

        let factory = entry
            .factory
            .as_ref()
            .ok_or_else(|| unresolvable("entry has no factory".to_string()))?;

        factory().map_err(|e| unresolvable(format!("{e:#}")))
    }
}

impl DependencySource for TaskRegistry {
    fn dependencies_of(&self, id: &TaskId) -> Vec<TaskId> {
        self.entries
            .get(id)
            .map(|e| e.descriptor.dependencies.clone())
            .unwrap_or_default()
    }
}

impl fmt::Debug for TaskRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ids: Vec<&TaskId> = self.entries.keys().collect();
        ids.sort();
        f.debug_struct("TaskRegistry").field("tasks", &ids).finish()
    }
}
