//! Centralized validation and helper functions.

use std::path::{Path, PathBuf};

use crate::core::types::Mode;

/// Validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Column numbers start at 1, got 0 for {0}")]
    ZeroColumn(&'static str),
    #[error("Cannot derive an output file name from {}", .0.display())]
    NoFileName(PathBuf),
}

/// Convert a 1-based column number given on the command line to a 0-based index.
///
/// # Examples
///
/// ```
/// use biobox_taxid::utils::validation::to_zero_based;
///
/// assert_eq!(to_zero_based(1, "--key-col"), Ok(0));
/// assert!(to_zero_based(0, "--key-col").is_err());
/// ```
///
/// # Errors
///
/// Returns `ValidationError::ZeroColumn` for column 0.
pub fn to_zero_based(column: usize, option: &'static str) -> Result<usize, ValidationError> {
    column
        .checked_sub(1)
        .ok_or(ValidationError::ZeroColumn(option))
}

/// Resolve an input path against an optional input directory.
/// Absolute paths are returned unchanged.
#[must_use]
pub fn resolve_input(input_dir: Option<&Path>, path: &Path) -> PathBuf {
    match input_dir {
        Some(dir) if path.is_relative() => dir.join(path),
        _ => path.to_path_buf(),
    }
}

/// Derive the output path for a run: `<biobox stem>_<mode suffix>.tsv`, next to the biobox file.
///
/// # Errors
///
/// Returns `ValidationError::NoFileName` if the biobox path has no file name.
pub fn derive_output_path(biobox: &Path, mode: Mode) -> Result<PathBuf, ValidationError> {
    let stem = biobox
        .file_stem()
        .and_then(|s| s.to_str())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| ValidationError::NoFileName(biobox.to_path_buf()))?;

    let file_name = format!("{stem}_{}.tsv", mode.output_suffix());
    Ok(biobox.with_file_name(file_name))
}
