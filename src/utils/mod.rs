//! Shared helpers for command-line values and paths.

pub mod validation;
