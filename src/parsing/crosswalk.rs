//! Parsers for the name crosswalks used in GTDB mode.
//!
//! - taxonkit `name2taxid`: NCBI name -> taxid. The name column is chosen by
//!   the caller, the taxid is always the last column. Names taxonkit could not
//!   resolve come out with an empty taxid and are kept that way.
//! - gtdb_to_taxdump `ncbi-gtdb_map.py`: GTDB name (column 1) -> NCBI name
//!   (column 2). The header line starts with `ncbi_taxonomy`.

use std::path::Path;

use crate::core::mapping::Mapping;
use crate::parsing::input::read_text;
use crate::parsing::tsv::{column, parse_table_text, Expected, Layout, ParseError};

const TAXONKIT_LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["#"],
    trim: false,
};

const TAXDUMP_LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["#", "ncbi_taxonomy"],
    trim: true,
};

/// Parse a taxonkit `name2taxid` output file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRow` if a line lacks the name or taxid column.
pub fn parse_taxonkit_file(path: &Path, name_col: usize) -> Result<Mapping, ParseError> {
    let text = read_text(path)?;
    parse_taxonkit_text(&text, &path.display().to_string(), name_col)
}

/// Parse taxonkit `name2taxid` text into an NCBI name -> taxid mapping
///
/// `name_col` is 0-based.
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a line lacks the name column or has
/// no separate taxid column.
pub fn parse_taxonkit_text(
    text: &str,
    input: &str,
    name_col: usize,
) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, TAXONKIT_LAYOUT, |fields| {
        if fields.len() < 2 {
            return Err(Expected::AtLeast(2));
        }
        let name = column(fields, name_col)?.trim();
        let tax_id = fields[fields.len() - 1].trim();
        Ok((name.to_string(), tax_id.to_string()))
    })
}

/// Parse a gtdb_to_taxdump `ncbi-gtdb_map.py` output file
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRow` if a line has fewer than two fields.
pub fn parse_gtdb_to_taxdump_file(path: &Path) -> Result<Mapping, ParseError> {
    let text = read_text(path)?;
    parse_gtdb_to_taxdump_text(&text, &path.display().to_string())
}

/// Parse gtdb_to_taxdump text into a GTDB name -> NCBI name mapping
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a line has fewer than two fields.
pub fn parse_gtdb_to_taxdump_text(text: &str, input: &str) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, TAXDUMP_LAYOUT, |fields| {
        let gtdb_name = column(fields, 0)?;
        let ncbi_name = column(fields, 1)?;
        Ok((gtdb_name.to_string(), ncbi_name.to_string()))
    })
}
