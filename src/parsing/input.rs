//! Reading table files and directories of table files.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

use crate::core::mapping::Mapping;
use crate::parsing::tsv::ParseError;

fn is_gzipped(path: &Path) -> bool {
    let path_str = path.to_string_lossy().to_lowercase();
    path_str.ends_with(".gz") || path_str.ends_with(".bgz")
}

fn io_error(path: &Path) -> impl FnOnce(std::io::Error) -> ParseError + '_ {
    move |error| ParseError::Io {
        path: path.to_path_buf(),
        error,
    }
}

/// Read a whole text file, decompressing gzip input by extension.
///
/// # Errors
///
/// Returns `ParseError::Io` if the file cannot be opened or is not valid UTF-8.
pub fn read_text(path: &Path) -> Result<String, ParseError> {
    if !is_gzipped(path) {
        return std::fs::read_to_string(path).map_err(io_error(path));
    }

    let file = File::open(path).map_err(io_error(path))?;
    let mut text = String::new();
    GzDecoder::new(file)
        .read_to_string(&mut text)
        .map_err(io_error(path))?;
    Ok(text)
}

/// List the regular files directly inside `dir`, sorted by name.
///
/// # Errors
///
/// Returns `ParseError::NotADirectory` if `dir` is not a directory, or
/// `ParseError::Io` if it cannot be listed.
pub fn list_files(dir: &Path) -> Result<Vec<PathBuf>, ParseError> {
    if !dir.is_dir() {
        return Err(ParseError::NotADirectory(dir.to_path_buf()));
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(io_error(dir))? {
        let path = entry.map_err(io_error(dir))?.path();
        if path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Load one file, or every file of a directory merged in name order (later files win).
///
/// # Errors
///
/// Propagates read errors and the first malformed row from any file.
pub fn load_path<F>(path: &Path, mut parse_text: F) -> Result<Mapping, ParseError>
where
    F: FnMut(&str, &str) -> Result<Mapping, ParseError>,
{
    if !path.is_dir() {
        let text = read_text(path)?;
        return parse_text(&text, &path.display().to_string());
    }

    let mut merged = Mapping::new();
    for file in list_files(path)? {
        let text = read_text(&file)?;
        merged.merge(parse_text(&text, &file.display().to_string())?);
    }
    Ok(merged)
}
