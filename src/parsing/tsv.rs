//! Shared tab-separated line walker used by every table loader.
//!
//! Each format supplies its comment markers and a row extractor that turns the
//! split fields of one data line into a key/value pair. The walker handles
//! blank lines, comment skipping, and attaching the input name and line number
//! to malformed rows.

use std::path::PathBuf;
use thiserror::Error;

use crate::core::mapping::Mapping;

/// How many tab-separated fields a row needed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    Exactly(usize),
    AtLeast(usize),
}

impl std::fmt::Display for Expected {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Exactly(n) => write!(f, "exactly {n}"),
            Self::AtLeast(n) => write!(f, "at least {n}"),
        }
    }
}

#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read {}: {error}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        error: std::io::Error,
    },

    #[error("Malformed row in {input} line {line}: expected {expected} tab-separated fields, found {found}")]
    MalformedRow {
        input: String,
        line: usize,
        expected: Expected,
        found: usize,
    },

    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),
}

/// Line handling rules for one table format
#[derive(Debug, Clone, Copy)]
pub struct Layout<'a> {
    /// Lines starting with any of these prefixes are skipped
    pub comment_prefixes: &'a [&'a str],
    /// Trim surrounding whitespace from the whole line before splitting
    pub trim: bool,
}

impl Layout<'_> {
    fn is_comment(&self, line: &str) -> bool {
        self.comment_prefixes
            .iter()
            .any(|prefix| line.starts_with(prefix))
    }
}

/// Fetch a 0-based column, reporting how many fields the row needed when it is absent.
pub fn column<'a>(fields: &[&'a str], index: usize) -> Result<&'a str, Expected> {
    fields
        .get(index)
        .copied()
        .ok_or(Expected::AtLeast(index + 1))
}

/// Last segment of a `sep`-joined string (the deepest rank of a lineage).
pub fn last_segment(value: &str, sep: char) -> &str {
    value.rsplit(sep).next().unwrap_or(value)
}

/// Walk `text` line by line and collect one key/value pair per data line.
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` for the first data line the extractor rejects.
/// Line numbers are 1-based.
pub fn parse_table_text<F>(
    text: &str,
    input: &str,
    layout: Layout<'_>,
    mut extract: F,
) -> Result<Mapping, ParseError>
where
    F: FnMut(&[&str]) -> Result<(String, String), Expected>,
{
    let mut mapping = Mapping::new();

    for (i, raw) in text.lines().enumerate() {
        if raw.trim().is_empty() || layout.is_comment(raw) {
            continue;
        }

        let line = if layout.trim { raw.trim() } else { raw };
        let fields: Vec<&str> = line.split('\t').collect();

        let (key, value) = extract(&fields).map_err(|expected| ParseError::MalformedRow {
            input: input.to_string(),
            line: i + 1,
            expected,
            found: fields.len(),
        })?;

        mapping.insert(key, value);
    }

    Ok(mapping)
}
