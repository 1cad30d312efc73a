// src/bootstrap.rs

//! One-stop wiring of modules, container and scheduler.
//!
//! ```no_run
//! use bootseq::bootstrap::Bootstrapper;
//! use bootseq::container::TaskModule;
//! use bootseq::dag::TaskDescriptor;
//! use bootseq::exec::from_fn;
//!
//! let module = TaskModule::new("app")
//!     .with_task(TaskDescriptor::new("config"), || from_fn(|| Ok(())))
//!     .with_task(TaskDescriptor::new("db").after("config"), || from_fn(|| Ok(())));
//!
//! let booted = Bootstrapper::new()
//!     .add_module(module)
//!     .add_all_startup_tasks()
//!     .run()?;
//! assert_eq!(booted.report.order(), vec!["config", "db"]);
//! # Ok::<(), bootseq::errors::BootseqError>(())
//! ```

use tracing::{debug, warn};

use crate::container::{ConcreteDiscovery, TaskModule, TaskRegistry};
use crate::dag::{RunReport, Scheduler, SchedulerConfig};
use crate::errors::Result;
use crate::types::{CycleDetection, TaskId};

/// Outcome of a successful [`Bootstrapper::run`]. The registry is handed
/// back so the caller can keep resolving from it.
#[derive(Debug)]
pub struct Bootstrapped {
    pub registry: TaskRegistry,
    pub report: RunReport,
}

#[derive(Debug, Default)]
pub struct Bootstrapper {
    modules: Vec<TaskModule>,
    explicit: Vec<TaskId>,
    discover_all: bool,
    config: SchedulerConfig,
}

impl Bootstrapper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a module. A module whose name is already registered is
    /// ignored.
    pub fn add_module(mut self, module: TaskModule) -> Self {
        if self.modules.iter().any(|m| m.name() == module.name()) {
            warn!(module = module.name(), "module already registered; ignoring");
            return self;
        }
        self.modules.push(module);
        self
    }

    pub fn add_modules(self, modules: impl IntoIterator<Item = TaskModule>) -> Self {
        modules.into_iter().fold(self, |b, m| b.add_module(m))
    }

    /// Queue one task explicitly. Explicit tasks are queued before any
    /// discovered ones.
    pub fn add_startup_task(mut self, id: impl Into<TaskId>) -> Self {
        self.explicit.push(id.into());
        self
    }

    /// At run time, also queue every instantiable task found in the
    /// registered modules.
    pub fn add_all_startup_tasks(mut self) -> Self {
        self.discover_all = true;
        self
    }

    pub fn with_iteration_threshold(mut self, threshold: usize) -> Self {
        self.config.iteration_threshold = threshold;
        self
    }

    pub fn with_cycle_detection(mut self, mode: CycleDetection) -> Self {
        self.config.cycle_detection = mode;
        self
    }

    pub fn with_scheduler_config(mut self, config: SchedulerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn modules(&self) -> &[TaskModule] {
        &self.modules
    }

    /// Build the container, queue the tasks and run them.
    pub fn run(&self) -> Result<Bootstrapped> {
        let (registry, mut scheduler) = self.prepare();
        let report = scheduler.run(&registry, &registry)?;
        Ok(Bootstrapped { registry, report })
    }

    /// Execution order `run` would produce, without executing anything.
    pub fn plan(&self) -> Result<RunReport> {
        let (registry, scheduler) = self.prepare();
        scheduler.plan(&registry)
    }

    fn prepare(&self) -> (TaskRegistry, Scheduler) {
        let registry = TaskRegistry::from_modules(&self.modules);
        debug!(tasks = registry.len(), modules = self.modules.len(), "container built");

        let mut scheduler = Scheduler::with_config(self.config);
        for id in self.explicit.iter().cloned() {
            scheduler.register(id);
        }
        if self.discover_all {
            scheduler.register_discovered(&ConcreteDiscovery, &self.modules);
        }

        (registry, scheduler)
    }
}
