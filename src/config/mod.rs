// src/config/mod.rs

//! Manifest loading and validation for bootseq.
//!
//! Responsibilities:
//! - Define the TOML-backed data model (`model.rs`).
//! - Load a manifest from disk (`loader.rs`).
//! - Validate the structural invariants a manifest must satisfy
//!   (`validate.rs`). Dependency references are checked by the scheduler at
//!   run time, not here.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path};
pub use model::{Manifest, RawManifest, SchedulerSection, TaskConfig};
