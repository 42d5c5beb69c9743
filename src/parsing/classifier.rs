//! Parsers for bin classifier outputs: BAT `bin2classification` and GTDB-Tk summary files.
//!
//! Both map a bin id to the deepest rank of a semicolon-joined lineage:
//!
//! - BAT: column 1 is the bin file name (`bin.1.fa`), column 4 the lineage
//!   of taxids (`1;131567;2;1224*`). The bin id is the file name up to the
//!   first `.`, and a trailing `*` marks a rank BAT was not certain about.
//! - GTDB-Tk: column 1 is the bin id, column 2 the lineage of names
//!   (`d__Bacteria;...;s__Escherichia coli`). The header starts with
//!   `user_genome`.
//!
//! Both loaders accept a directory and merge every file in it.

use std::path::Path;

use crate::core::mapping::Mapping;
use crate::parsing::input::load_path;
use crate::parsing::tsv::{column, last_segment, parse_table_text, Layout, ParseError};

const BAT_LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["#"],
    trim: true,
};

const GTDB_LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["user_genome", "#"],
    trim: true,
};

/// Marker BAT appends to lineage entries below its support threshold
const AMBIGUOUS_MARKER: char = '*';

/// Parse BAT `bin2classification` text into a bin id -> taxid mapping
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a line has fewer than four fields.
pub fn parse_bat_text(text: &str, input: &str) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, BAT_LAYOUT, |fields| {
        let bin_file = column(fields, 0)?;
        let lineage = column(fields, 3)?;

        let bin_id = bin_file.split('.').next().unwrap_or(bin_file);
        let deepest = last_segment(lineage, ';');
        let tax_id = deepest.strip_suffix(AMBIGUOUS_MARKER).unwrap_or(deepest);

        Ok((bin_id.to_string(), tax_id.to_string()))
    })
}

/// Load a BAT `bin2classification` file, or a directory of them
///
/// # Errors
///
/// Returns `ParseError::Io` if an input cannot be read, or
/// `ParseError::MalformedRow` for the first short line.
pub fn load_bat(path: &Path) -> Result<Mapping, ParseError> {
    load_path(path, parse_bat_text)
}

/// Parse GTDB-Tk summary text into a bin id -> GTDB name mapping
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a line has fewer than two fields.
pub fn parse_gtdb_summary_text(text: &str, input: &str) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, GTDB_LAYOUT, |fields| {
        let bin_id = column(fields, 0)?;
        let classification = column(fields, 1)?;
        Ok((
            bin_id.to_string(),
            last_segment(classification, ';').to_string(),
        ))
    })
}

/// Load a GTDB-Tk summary file, or a directory of them (e.g. bac120 and ar53 summaries)
///
/// # Errors
///
/// Returns `ParseError::Io` if an input cannot be read, or
/// `ParseError::MalformedRow` for the first short line.
pub fn load_gtdb_summary(path: &Path) -> Result<Mapping, ParseError> {
    load_path(path, parse_gtdb_summary_text)
}
