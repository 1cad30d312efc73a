// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use crate::config::default_config_path;

/// Command-line arguments for `bootseq`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bootseq",
    version,
    about = "Run startup commands in dependency order.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the manifest file (TOML).
    ///
    /// Default: `Bootseq.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value_os_t = default_config_path())]
    pub config: PathBuf,

    /// Override `[scheduler].iteration_threshold`.
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    pub threshold: Option<u64>,

    /// Check for missing dependencies and cycles before running anything,
    /// instead of relying on the iteration threshold.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `BOOTSEQ_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the execution order, but don't run anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
