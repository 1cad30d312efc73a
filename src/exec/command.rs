// src/exec/command.rs

use std::process::{Command, Output};

use anyhow::{Context, Result, bail};
use tracing::{debug, info};

use crate::exec::StartupTask;
use crate::types::TaskId;

/// Startup task that runs a shell command to completion.
///
/// The command blocks the scheduler until it exits. stdout lines are logged
/// at info, stderr lines at debug.
#[derive(Debug, Clone)]
pub struct CommandTask {
    id: TaskId,
    cmd: String,
}

impl CommandTask {
    pub fn new(id: TaskId, cmd: impl Into<String>) -> Self {
        Self {
            id,
            cmd: cmd.into(),
        }
    }

    pub fn cmd(&self) -> &str {
        &self.cmd
    }

    fn shell_command(&self) -> Command {
        // Build a shell command appropriate for the platform.
        if cfg!(windows) {
            let mut c = Command::new("cmd");
            c.arg("/C").arg(&self.cmd);
            c
        } else {
            let mut c = Command::new("sh");
            c.arg("-c").arg(&self.cmd);
            c
        }
    }

    fn log_output(&self, output: &Output) {
        for line in String::from_utf8_lossy(&output.stdout).lines() {
            info!(task = %self.id, "stdout: {}", line);
        }
        for line in String::from_utf8_lossy(&output.stderr).lines() {
            debug!(task = %self.id, "stderr: {}", line);
        }
    }
}

impl StartupTask for CommandTask {
    fn execute(&mut self) -> Result<()> {
        info!(task = %self.id, cmd = %self.cmd, "starting task process");

        let output = self
            .shell_command()
            .output()
            .with_context(|| format!("spawning process for task '{}'", self.id))?;

        self.log_output(&output);

        let code = output.status.code().unwrap_or(-1);
        info!(
            task = %self.id,
            exit_code = code,
            success = output.status.success(),
            "task process exited"
        );

        if !output.status.success() {
            bail!("task '{}' exited with status {}", self.id, code);
        }
        Ok(())
    }
}
