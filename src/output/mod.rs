//! Writer for CAMI binning files with a `TAXID` column.
//!
//! ```text
//! #CAMI Format for Binning
//! @Version:0.9.0
//! @SampleID:_SAMPLEID_
//! @@SEQUENCEID	BINID	TAXID
//! contig_1	bin_1	562
//! ```

use std::io::{BufWriter, Write};
use std::path::Path;

use tempfile::{Builder, NamedTempFile};

use crate::core::types::ResolvedRecord;

pub const FORMAT_MARKER: &str = "#CAMI Format for Binning";
pub const FORMAT_VERSION: &str = "0.9.0";
/// Sample id written when none is given
pub const DEFAULT_SAMPLE_ID: &str = "_SAMPLEID_";
pub const COLUMN_HEADER: &str = "@@SEQUENCEID\tBINID\tTAXID";

/// Write the header and one row per record to `writer`
///
/// # Errors
///
/// Returns any error from the underlying writer.
pub fn write_binning<W: Write>(
    writer: &mut W,
    sample_id: &str,
    records: &[ResolvedRecord],
) -> std::io::Result<()> {
    writeln!(writer, "{FORMAT_MARKER}")?;
    writeln!(writer, "@Version:{FORMAT_VERSION}")?;
    writeln!(writer, "@SampleID:{sample_id}")?;
    writeln!(writer, "{COLUMN_HEADER}")?;

    for record in records {
        writeln!(
            writer,
            "{}\t{}\t{}",
            record.sequence_id, record.bin_id, record.tax_id
        )?;
    }

    Ok(())
}

/// Temporary files default to owner-only access; ask for 0o666 so the
/// process umask decides, as it would for a plain create.
#[allow(unused_mut)]
fn create_temp(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Write a binning file to `path`.
///
/// The content goes to a temporary file next to `path` which is renamed into
/// place once complete, so `path` either holds the full output or is untouched.
///
/// # Errors
///
/// Returns an error if the temporary file cannot be created, written, or renamed.
pub fn write_binning_file(
    path: &Path,
    sample_id: &str,
    records: &[ResolvedRecord],
) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let temp = create_temp(dir)?;
    // an existing output keeps its mode
    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file().set_permissions(metadata.permissions())?;
    }
    {
        let mut writer = BufWriter::new(temp.as_file());
        write_binning(&mut writer, sample_id, records)?;
        writer.flush()?;
    }

    temp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
