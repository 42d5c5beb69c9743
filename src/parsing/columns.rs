//! Parser for generic id -> taxid tables (contig2taxid, binid2taxid).
//!
//! These come from arbitrary tools (e.g. a kraken2 per-contig report), so the
//! key and taxid columns are chosen by the caller. Lines starting with `#` are
//! skipped.

use std::path::Path;

use crate::core::mapping::Mapping;
use crate::parsing::input::read_text;
use crate::parsing::tsv::{column, parse_table_text, Layout, ParseError};

const LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["#"],
    trim: true,
};

/// 0-based key and value column positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnSpec {
    pub key: usize,
    pub value: usize,
}

/// Parse an id -> taxid table file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRow` if a line lacks the key or taxid column.
pub fn parse_id_table_file(path: &Path, columns: ColumnSpec) -> Result<Mapping, ParseError> {
    let text = read_text(path)?;
    parse_id_table_text(&text, &path.display().to_string(), columns)
}

/// Parse id -> taxid table text
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a line lacks the key or taxid column.
pub fn parse_id_table_text(
    text: &str,
    input: &str,
    columns: ColumnSpec,
) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, LAYOUT, |fields| {
        let key = column(fields, columns.key)?;
        let value = column(fields, columns.value)?;
        Ok((key.to_string(), value.to_string()))
    })
}
