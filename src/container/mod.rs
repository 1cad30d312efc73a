// src/container/mod.rs

//! Task container: modules of task entries, discovery over them, and the
//! registry that resolves ids into runnable tasks.
//!
//! - [`module`] defines `TaskEntry` and `TaskModule`.
//! - [`discovery`] finds instantiable tasks across modules.
//! - [`registry`] is the production `Resolver` + `DependencySource`.

pub mod discovery;
pub mod module;
pub mod registry;

pub use discovery::{ConcreteDiscovery, Discovery, PredicateDiscovery};
pub use module::{EntryKind, TaskEntry, TaskFactory, TaskModule};
pub use registry::TaskRegistry;
