use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

/// Opaque key naming one startup task.
///
/// Two ids are the same task if and only if their names are equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(name: impl Into<String>) -> Self {
        TaskId(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(name: &str) -> Self {
        TaskId(name.to_string())
    }
}

impl From<String> for TaskId {
    fn from(name: String) -> Self {
        TaskId(name)
    }
}

impl AsRef<str> for TaskId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// How the scheduler decides that a dependency graph cannot be drained.
///
/// - `Threshold`: count dequeues and give up once the configured iteration
///   threshold is exceeded (default). Deep acyclic graphs can trip it.
/// - `Strict`: check for missing ids and real cycles up front, then drain
///   without an iteration bound.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CycleDetection {
    Threshold,
    Strict,
}

impl Default for CycleDetection {
    fn default() -> Self {
        CycleDetection::Threshold
    }
}

impl FromStr for CycleDetection {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "threshold" => Ok(CycleDetection::Threshold),
            "strict" => Ok(CycleDetection::Strict),
            other => Err(format!(
                "invalid cycle_detection: {other} (expected \"threshold\" or \"strict\")"
            )),
        }
    }
}
