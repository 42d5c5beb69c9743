//! End-to-end runs: validate the configuration, load the tables, resolve, write.
//!
//! A run either writes the complete output file or nothing at all. Missing
//! inputs for the selected mode are reported as [`ConfigError`] before any
//! file is opened.

pub mod config;
pub mod run;

pub use config::{ConfigError, Inputs, RunConfig, RunPlan, Tool};
pub use run::{execute, run, PipelineError, RunSummary, TableSummary};
