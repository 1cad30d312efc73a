// src/exec/backend.rs

//! Pluggable task resolution.
//!
//! The scheduler never constructs tasks. When a task becomes ready it asks a
//! [`Resolver`] for a runnable instance and calls [`StartupTask::execute`]
//! on it exactly once.
//!
//! - [`crate::container::TaskRegistry`] is the production resolver.
//! - Tests can provide their own resolver that, for example, records which
//!   tasks ran and in which order.

use crate::errors::Result;
use crate::types::TaskId;

/// A unit of startup work.
pub trait StartupTask {
    /// Run the task to completion.
    ///
    /// Any error is returned from the scheduler's `run` unchanged.
    fn execute(&mut self) -> anyhow::Result<()>;
}

impl<F> StartupTask for F
where
    F: FnMut() -> anyhow::Result<()>,
{
    fn execute(&mut self) -> anyhow::Result<()> {
        self()
    }
}

/// Pin a closure's signature so it can be used as a [`StartupTask`].
///
/// `from_fn(|| Ok(()))` infers the error type that a bare closure would not.
pub fn from_fn<F>(f: F) -> F
where
    F: FnMut() -> anyhow::Result<()>,
{
    f
}

/// Produces ready-to-run task instances by id.
pub trait Resolver {
    /// Called lazily, once per execution, only when `id` is ready.
    fn resolve(&self, id: &TaskId) -> Result<Box<dyn StartupTask>>;
}
