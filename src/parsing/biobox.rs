//! Parser for CAMI biobox binning files.
//!
//! Lines starting with `@` or `#` are header/metadata lines. Every other line
//! must be exactly `SEQUENCEID\tBINID`.

use std::path::Path;

use crate::core::mapping::Mapping;
use crate::parsing::input::read_text;
use crate::parsing::tsv::{parse_table_text, Expected, Layout, ParseError};

const LAYOUT: Layout<'static> = Layout {
    comment_prefixes: &["@", "#"],
    trim: false,
};

/// Parse a biobox binning file into a sequence id -> bin id mapping
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be read, or
/// `ParseError::MalformedRow` if a data line does not have exactly two fields.
pub fn parse_biobox_file(path: &Path) -> Result<Mapping, ParseError> {
    let text = read_text(path)?;
    parse_biobox_text(&text, &path.display().to_string())
}

/// Parse biobox text into a sequence id -> bin id mapping, in file order
///
/// # Errors
///
/// Returns `ParseError::MalformedRow` if a data line does not have exactly two fields.
pub fn parse_biobox_text(text: &str, input: &str) -> Result<Mapping, ParseError> {
    parse_table_text(text, input, LAYOUT, |fields| match fields {
        [sequence_id, bin_id] => Ok(((*sequence_id).to_string(), (*bin_id).to_string())),
        _ => Err(Expected::Exactly(2)),
    })
}
