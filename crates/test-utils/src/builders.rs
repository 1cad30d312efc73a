#![allow(dead_code)]

use std::collections::BTreeMap;
use bootseq::config::{Manifest, RawManifest, SchedulerSection, TaskConfig};
use bootseq::types::CycleDetection;

/// Builder for `Manifest` to simplify test setup.
pub struct ManifestBuilder {
    manifest: RawManifest,
}

impl ManifestBuilder {
    pub fn new() -> Self {
        Self {
            manifest: RawManifest {
                scheduler: SchedulerSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.manifest.task.insert(name.to_string(), task);
        self
    }

    pub fn with_iteration_threshold(mut self, threshold: usize) -> Self {
        self.manifest.scheduler.iteration_threshold = threshold;
        self
    }

    pub fn with_cycle_detection(mut self, mode: CycleDetection) -> Self {
        self.manifest.scheduler.cycle_detection = mode;
        self
    }

    /// The unvalidated manifest, for tests of validation itself.
    pub fn build_raw(self) -> RawManifest {
        self.manifest
    }

    pub fn build(self) -> Manifest {
        Manifest::try_from(self.manifest).expect("Failed to build valid manifest from builder")
    }
}

impl Default for ManifestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new(cmd: &str) -> Self {
        Self {
            task: TaskConfig {
                cmd: Some(cmd.to_string()),
                ..TaskConfig::default()
            },
        }
    }

    /// An abstract task without a command.
    pub fn abstract_task() -> Self {
        Self {
            task: TaskConfig {
                is_abstract: true,
                ..TaskConfig::default()
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn description(mut self, text: &str) -> Self {
        self.task.description = Some(text.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}
