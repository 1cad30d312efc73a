// src/errors.rs

//! Crate-wide error type and result alias.

use thiserror::Error;

use crate::types::TaskId;

#[derive(Error, Debug)]
pub enum BootseqError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// A dequeued task waits on an id that is neither executed nor pending.
    #[error("task '{dependent}' depends on '{missing}', which was never registered")]
    MissingDependency { dependent: TaskId, missing: TaskId },

    /// The drain loop exceeded its iteration threshold with work left over.
    #[error(
        "possible circular dependency: exceeded after {iterations} iterations \
         (threshold {threshold}, {pending} task(s) still pending)"
    )]
    CircularDependencyThreshold {
        iterations: usize,
        threshold: usize,
        pending: usize,
    },

    /// Strict mode found a genuine cycle.
    #[error("cycle detected in startup tasks involving '{task}'")]
    CircularDependency { task: TaskId },

    #[error("task '{task}' could not be resolved: {reason}")]
    Unresolvable { task: TaskId, reason: String },

    /// Error returned by a task's own `execute`, passed through as-is.
    #[error(transparent)]
    Task(anyhow::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, BootseqError>;
