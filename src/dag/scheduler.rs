use tracing::{debug, info, warn};

use crate::container::{Discovery, TaskModule};
use crate::dag::descriptor::DependencySource;
use crate::dag::executed::ExecutedSet;
use crate::dag::queue::PendingQueue;
use crate::dag::run_report::RunReport;
use crate::dag::strict;
use crate::errors::{BootseqError, Result};
use crate::exec::Resolver;
use crate::types::{CycleDetection, TaskId};

/// Default bound on dequeues before a run is declared circular.
pub const DEFAULT_ITERATION_THRESHOLD: usize = 500;

/// Settings fixed at scheduler construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub iteration_threshold: usize,
    pub cycle_detection: CycleDetection,
}

impl Default for SchedulerConfig {
    fn default() -> Self {
        Self {
            iteration_threshold: DEFAULT_ITERATION_THRESHOLD,
            cycle_detection: CycleDetection::default(),
        }
    }
}

/// Scheduler holds the pending queue plus its immutable settings.
///
/// It is responsible for:
/// - collecting registered task ids in FIFO order
/// - draining them in dependency order when [`run`](Self::run) is called
/// - failing fast on missing dependencies or an undrainable graph
///
/// The executed set and the iteration counter belong to a single `run` call;
/// nothing carries over between runs.
#[derive(Debug, Default)]
pub struct Scheduler {
    config: SchedulerConfig,
    queue: PendingQueue,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Threshold mode with a custom iteration threshold.
    pub fn with_threshold(iteration_threshold: usize) -> Self {
        Self::with_config(SchedulerConfig {
            iteration_threshold,
            ..SchedulerConfig::default()
        })
    }

    pub fn with_config(config: SchedulerConfig) -> Self {
        Self {
            config,
            queue: PendingQueue::new(),
        }
    }

    pub fn config(&self) -> SchedulerConfig {
        self.config
    }

    pub fn iteration_threshold(&self) -> usize {
        self.config.iteration_threshold
    }

    /// Tasks still waiting. After a failed run this is the partially drained
    /// queue, exactly as the failure left it.
    pub fn pending(&self) -> &PendingQueue {
        &self.queue
    }

    /// Queue a single task. Dependencies are not checked until `run`.
    pub fn register(&mut self, id: impl Into<TaskId>) {
        let id = id.into();
        debug!(task = %id, "registered startup task");
        self.queue.enqueue(id);
    }

    /// Queue every task the discovery service finds in `modules`, in the
    /// order it returns them. Returns how many were queued.
    pub fn register_discovered<D>(&mut self, discovery: &D, modules: &[TaskModule]) -> usize
    where
        D: Discovery + ?Sized,
    {
        let found = discovery.discover(modules);
        let count = found.len();
        for id in found {
            self.register(id);
        }
        debug!(count, modules = modules.len(), "registered discovered startup tasks");
        count
    }

    /// Drain the queue, resolving and executing each task once its
    /// dependencies have executed.
    ///
    /// On error the run stops immediately: tasks that already ran are not
    /// rolled back and the remaining queue is left in place.
    pub fn run<R, S>(&mut self, resolver: &R, source: &S) -> Result<RunReport>
    where
        R: Resolver + ?Sized,
        S: DependencySource + ?Sized,
    {
        info!(
            pending = self.queue.len(),
            mode = ?self.config.cycle_detection,
            threshold = self.config.iteration_threshold,
            "running startup tasks"
        );

        let report = drain(&mut self.queue, self.config, source, |id| {
            let mut task = resolver.resolve(id)?;
            info!(task = %id, "executing startup task");
            task.execute().map_err(BootseqError::Task)
        })?;

        info!(
            executed = report.executed.len(),
            iterations = report.iterations,
            "startup tasks complete"
        );
        Ok(report)
    }

    /// Compute the order `run` would execute in, without resolving or
    /// executing anything. The queue is left untouched.
    pub fn plan<S>(&self, source: &S) -> Result<RunReport>
    where
        S: DependencySource + ?Sized,
    {
        let mut queue = self.queue.clone();
        drain(&mut queue, self.config, source, |_| Ok(()))
    }
}

/// The drain loop shared by `run` and `plan`.
fn drain<S, F>(
    queue: &mut PendingQueue,
    config: SchedulerConfig,
    source: &S,
    mut execute: F,
) -> Result<RunReport>
where
    S: DependencySource + ?Sized,
    F: FnMut(&TaskId) -> Result<()>,
{
    let bounded = match config.cycle_detection {
        CycleDetection::Threshold => true,
        CycleDetection::Strict => {
            strict::preflight(queue, source)?;
            false
        }
    };

    let mut executed = ExecutedSet::new();
    let mut report = RunReport::default();
    let mut iterations: usize = 0;

    while !queue.is_empty() {
        if bounded && iterations > config.iteration_threshold {
            warn!(
                iterations,
                threshold = config.iteration_threshold,
                pending = queue.len(),
                "iteration threshold exceeded; treating as circular dependency"
            );
            return Err(BootseqError::CircularDependencyThreshold {
                iterations,
                threshold: config.iteration_threshold,
                pending: queue.len(),
            });
        }

        let Some(id) = queue.dequeue() else {
            break;
        };
        let deps = source.dependencies_of(&id);

        if executed.contains_all(&deps) {
            execute(&id)?;
            executed.record(id.clone());
            report.executed.push(id);
        } else {
            for dep in deps.iter().filter(|d| !executed.contains(d)) {
                if !queue.contains(dep) {
                    warn!(task = %id, missing = %dep, "dependency was never registered");
                    return Err(BootseqError::MissingDependency {
                        dependent: id,
                        missing: dep.clone(),
                    });
                }
            }
            debug!(task = %id, iteration = iterations, "dependencies pending; requeueing");
            queue.enqueue(id);
        }

        iterations += 1;
    }

    report.iterations = iterations;
    Ok(report)
}
