// src/dag/mod.rs

//! Dependency-ordered scheduling of startup tasks.
//!
//! - [`descriptor`] holds task descriptors and the `DependencySource` seam.
//! - [`queue`] is the FIFO pending queue.
//! - [`executed`] records which tasks have run in the current drain.
//! - [`scheduler`] contains the drain loop itself.
//! - [`strict`] is the up-front missing/cycle check for strict mode.
//! - [`run_report`] defines the result of a successful run.

pub mod descriptor;
pub mod executed;
pub mod queue;
pub mod run_report;
pub mod scheduler;
pub mod strict;

pub use descriptor::{DependencySource, DescriptorTable, TaskDescriptor};
pub use executed::ExecutedSet;
pub use queue::PendingQueue;
pub use run_report::RunReport;
pub use scheduler::{DEFAULT_ITERATION_THRESHOLD, Scheduler, SchedulerConfig};
