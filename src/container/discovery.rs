// src/container/discovery.rs

//! Bulk discovery of startup tasks across modules.

use crate::container::module::{TaskEntry, TaskModule};
use crate::types::TaskId;

/// Finds the task ids in a set of modules that should be registered.
///
/// The returned order becomes the queue order for that batch.
pub trait Discovery {
    fn discover(&self, modules: &[TaskModule]) -> Vec<TaskId>;
}

/// Discovery keeping every entry that can actually be instantiated.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConcreteDiscovery;

impl Discovery for ConcreteDiscovery {
    fn discover(&self, modules: &[TaskModule]) -> Vec<TaskId> {
        discover_matching(modules, TaskEntry::is_instantiable)
    }
}

/// Discovery with a caller-supplied entry predicate.
#[derive(Debug, Clone, Copy)]
pub struct PredicateDiscovery<P> {
    predicate: P,
}

impl<P> PredicateDiscovery<P>
where
    P: Fn(&TaskEntry) -> bool,
{
    pub fn new(predicate: P) -> Self {
        Self { predicate }
    }
}

impl<P> Discovery for PredicateDiscovery<P>
where
    P: Fn(&TaskEntry) -> bool,
{
    fn discover(&self, modules: &[TaskModule]) -> Vec<TaskId> {
        discover_matching(modules, &self.predicate)
    }
}

/// Modules in order, entries in order, filtered by `predicate`.
fn discover_matching<P>(modules: &[TaskModule], predicate: P) -> Vec<TaskId>
where
    P: Fn(&TaskEntry) -> bool,
{
    modules
        .iter()
        .flat_map(|m| m.entries().iter())
        .filter(|entry| predicate(*entry))
        .map(|entry| entry.id().clone())
        .collect()
}
