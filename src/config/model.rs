// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::container::TaskModule;
use crate::dag::{DEFAULT_ITERATION_THRESHOLD, SchedulerConfig, TaskDescriptor};
use crate::exec::CommandTask;
use crate::types::{CycleDetection, TaskId};

/// Manifest exactly as read from a TOML file, before validation.
///
/// ```toml
/// [scheduler]
/// iteration_threshold = 500
/// cycle_detection = "threshold"
///
/// [task.config]
/// cmd = "echo loading config"
///
/// [task.migrate]
/// cmd = "echo migrating"
/// after = ["config"]
/// ```
///
/// All sections are optional at this stage; validation requires at least
/// one task.
#[derive(Debug, Clone, Deserialize)]
pub struct RawManifest {
    #[serde(default)]
    pub scheduler: SchedulerSection,

    /// All tasks from `[task.<name>]`, keyed by task name.
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// A validated manifest.
///
/// Only obtainable through `Manifest::try_from(RawManifest)` (see
/// `config::validate`) or [`crate::config::load_and_validate`].
#[derive(Debug, Clone)]
pub struct Manifest {
    pub scheduler: SchedulerSection,
    pub task: BTreeMap<String, TaskConfig>,
}

/// `[scheduler]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct SchedulerSection {
    /// Maximum dequeues before a run is treated as circular. Must be >= 1.
    #[serde(default = "default_iteration_threshold")]
    pub iteration_threshold: usize,

    /// `"threshold"` (default) or `"strict"`.
    #[serde(default)]
    pub cycle_detection: CycleDetection,
}

fn default_iteration_threshold() -> usize {
    DEFAULT_ITERATION_THRESHOLD
}

impl Default for SchedulerSection {
    fn default() -> Self {
        Self {
            iteration_threshold: default_iteration_threshold(),
            cycle_detection: CycleDetection::default(),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// Shell command to run. Required unless the task is abstract.
    #[serde(default)]
    pub cmd: Option<String>,

    /// Tasks that must have run before this one (`after = ["A", "B"]`).
    #[serde(default)]
    pub after: Vec<String>,

    /// Abstract tasks carry metadata only and are never discovered.
    #[serde(default, rename = "abstract")]
    pub is_abstract: bool,

    #[serde(default)]
    pub description: Option<String>,
}

impl TaskConfig {
    pub fn descriptor(&self, name: &str) -> TaskDescriptor {
        TaskDescriptor {
            id: TaskId::from(name),
            dependencies: self.after.iter().map(|d| TaskId::from(d.as_str())).collect(),
        }
    }
}

impl Manifest {
    pub(crate) fn new_unchecked(
        scheduler: SchedulerSection,
        task: BTreeMap<String, TaskConfig>,
    ) -> Self {
        Self { scheduler, task }
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig {
            iteration_threshold: self.scheduler.iteration_threshold,
            cycle_detection: self.scheduler.cycle_detection,
        }
    }

    /// Turn the manifest's tasks into a module of command tasks.
    ///
    /// Entries follow task-name order.
    pub fn to_module(&self, name: impl Into<String>) -> TaskModule {
        let mut module = TaskModule::new(name);

        for (task_name, tc) in self.task.iter() {
            let descriptor = tc.descriptor(task_name);
            module = match (&tc.cmd, tc.is_abstract) {
                (Some(cmd), false) => {
                    let id = descriptor.id.clone();
                    let cmd = cmd.clone();
                    module.with_task(descriptor, move || CommandTask::new(id.clone(), cmd.clone()))
                }
                _ => module.with_abstract(descriptor),
            };
        }

        module
    }
}
