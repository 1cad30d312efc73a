// src/lib.rs

pub mod bootstrap;
pub mod cli;
pub mod config;
pub mod container;
pub mod dag;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod types;

use std::path::Path;

use anyhow::Result;
use tracing::{debug, info};

use crate::bootstrap::Bootstrapper;
use crate::cli::CliArgs;
use crate::config::load_and_validate;
use crate::config::model::Manifest;
use crate::dag::{RunReport, SchedulerConfig};
use crate::types::CycleDetection;

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - manifest loading
/// - the manifest's tasks as a container module
/// - discovery + scheduler via [`Bootstrapper`]
pub fn run(args: CliArgs) -> Result<()> {
    let config_path = args.config.as_path();
    let manifest = load_and_validate(config_path)?;
    let scheduler_config = effective_scheduler_config(&manifest, &args);

    let bootstrapper = Bootstrapper::new()
        .add_module(manifest.to_module(module_name(config_path)))
        .add_all_startup_tasks()
        .with_scheduler_config(scheduler_config);

    if args.dry_run {
        let plan = bootstrapper.plan()?;
        print_dry_run(&manifest, scheduler_config, &plan);
        return Ok(());
    }

    let booted = bootstrapper.run()?;
    info!(order = ?booted.report.order(), "all startup tasks ran");
    Ok(())
}

/// Manifest `[scheduler]` settings with CLI overrides applied.
pub fn effective_scheduler_config(manifest: &Manifest, args: &CliArgs) -> SchedulerConfig {
    let mut cfg = manifest.scheduler_config();
    if let Some(threshold) = args.threshold {
        cfg.iteration_threshold = usize::try_from(threshold).unwrap_or(usize::MAX);
    }
    if args.strict {
        cfg.cycle_detection = CycleDetection::Strict;
    }
    cfg
}

/// Module name derived from the manifest file name, e.g. `Bootseq`.
fn module_name(config_path: &Path) -> String {
    config_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "manifest".to_string())
}

/// Simple dry-run output: print settings, tasks and the planned order.
fn print_dry_run(manifest: &Manifest, cfg: SchedulerConfig, plan: &RunReport) {
    println!("bootseq dry-run");
    println!("  scheduler.iteration_threshold = {}", cfg.iteration_threshold);
    println!("  scheduler.cycle_detection = {:?}", cfg.cycle_detection);
    println!();

    println!("tasks ({}):", manifest.task.len());
    for (name, task) in manifest.task.iter() {
        println!("  - {name}");
        if task.is_abstract {
            println!("      abstract: true");
        }
        if let Some(ref cmd) = task.cmd {
            println!("      cmd: {cmd}");
        }
        if !task.after.is_empty() {
            println!("      after: {:?}", task.after);
        }
        if let Some(ref description) = task.description {
            println!("      description: {description}");
        }
    }
    println!();

    println!("execution order ({} iterations):", plan.iterations);
    for (i, id) in plan.executed.iter().enumerate() {
        println!("  {}. {id}", i + 1);
    }

    debug!("dry-run complete (no execution)");
}
