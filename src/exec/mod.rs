// src/exec/mod.rs

//! Task execution layer.
//!
//! - [`backend`] provides the `StartupTask` and `Resolver` traits the
//!   scheduler talks to.
//! - [`command`] provides `CommandTask`, a startup task that runs a shell
//!   command and fails on a non-zero exit status.

pub mod backend;
pub mod command;

pub use backend::{Resolver, StartupTask, from_fn};
pub use command::CommandTask;
