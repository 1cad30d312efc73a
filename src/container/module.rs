// src/container/module.rs

use std::fmt;
use std::sync::Arc;

use crate::dag::TaskDescriptor;
use crate::exec::StartupTask;
use crate::types::TaskId;

/// Builds a fresh task instance each time it is called.
pub type TaskFactory = Arc<dyn Fn() -> anyhow::Result<Box<dyn StartupTask>> + Send + Sync>;

/// Whether an entry can be instantiated on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Concrete,
    /// Template or base entry; carries metadata but is never discovered.
    Abstract,
}

/// A task known to a module: its descriptor, its kind and how to build it.
#[derive(Clone)]
pub struct TaskEntry {
    pub descriptor: TaskDescriptor,
    pub kind: EntryKind,
    pub factory: Option<TaskFactory>,
}

impl TaskEntry {
    pub fn concrete(descriptor: TaskDescriptor, factory: TaskFactory) -> Self {
        Self {
            descriptor,
            kind: EntryKind::Concrete,
            factory: Some(factory),
        }
    }

    pub fn abstract_entry(descriptor: TaskDescriptor) -> Self {
        Self {
            descriptor,
            kind: EntryKind::Abstract,
            factory: None,
        }
    }

    pub fn id(&self) -> &TaskId {
        &self.descriptor.id
    }

    /// Concrete and buildable.
    pub fn is_instantiable(&self) -> bool {
        self.kind == EntryKind::Concrete && self.factory.is_some()
    }
}

impl fmt::Debug for TaskEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskEntry")
            .field("descriptor", &self.descriptor)
            .field("kind", &self.kind)
            .field("has_factory", &self.factory.is_some())
            .finish()
    }
}

/// Named group of task entries, the unit that discovery scans.
///
/// Entry order is preserved and becomes queue order when the module is
/// registered through discovery.
#[derive(Debug, Clone)]
pub struct TaskModule {
    name: String,
    entries: Vec<TaskEntry>,
}

impl TaskModule {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn entries(&self) -> &[TaskEntry] {
        &self.entries
    }

    pub fn with_entry(mut self, entry: TaskEntry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Add a concrete task built by `factory` on every resolution.
    pub fn with_task<F, T>(self, descriptor: TaskDescriptor, factory: F) -> Self
    where
        F: Fn() -> T + Send + Sync + 'static,
        T: StartupTask + 'static,
    {
        let factory: TaskFactory = Arc::new(move || {
            Ok::<_, anyhow::Error>(Box::new(factory()) as Box<dyn StartupTask>)
        });
        self.with_entry(TaskEntry::concrete(descriptor, factory))
    }

    pub fn with_abstract(self, descriptor: TaskDescriptor) -> Self {
        self.with_entry(TaskEntry::abstract_entry(descriptor))
    }
}
