// src/config/validate.rs

use crate::config::model::{Manifest, RawManifest};
use crate::errors::{BootseqError, Result};

impl TryFrom<RawManifest> for Manifest {
    type Error = BootseqError;

    fn try_from(raw: RawManifest) -> std::result::Result<Self, Self::Error> {
        validate_raw_manifest(&raw)?;
        Ok(Manifest::new_unchecked(raw.scheduler, raw.task))
    }
}

fn validate_raw_manifest(manifest: &RawManifest) -> Result<()> {
    ensure_has_tasks(manifest)?;
    validate_scheduler_section(manifest)?;
    validate_task_commands(manifest)?;
    Ok(())
}

fn ensure_has_tasks(manifest: &RawManifest) -> Result<()> {
    if manifest.task.is_empty() {
        return Err(BootseqError::ConfigError(
            "manifest must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

fn validate_scheduler_section(manifest: &RawManifest) -> Result<()> {
    // cycle_detection is strongly typed and validated during deserialization.

    if manifest.scheduler.iteration_threshold == 0 {
        return Err(BootseqError::ConfigError(
            "[scheduler].iteration_threshold must be >= 1 (got 0)".to_string(),
        ));
    }
    Ok(())
}

fn validate_task_commands(manifest: &RawManifest) -> Result<()> {
    for (name, task) in manifest.task.iter() {
        if task.is_abstract {
            continue;
        }
        let has_cmd = task.cmd.as_deref().is_some_and(|c| !c.trim().is_empty());
        if !has_cmd {
            return Err(BootseqError::ConfigError(format!(
                "task '{}' needs a non-empty `cmd` (or `abstract = true`)",
                name
            )));
        }
    }
    Ok(())
}
