//! Loading a roster of names from delimited record files.
//!
//! The allocation core only ever consumes an already parsed list of names:
//! this module is the external collaborator that produces one. Records are
//! one per line with the name as the first comma delimited field; anything
//! after the first field is ignored and blank records are skipped.
use crate::Result;
use std::{
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};
use tracing::debug;

/// Load a roster from the file at `path`.
///
/// # Errors
/// This method will error if the file can not be opened or read.
pub fn from_path(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    debug!(path = %path.display(), "loading roster");

    from_reader(BufReader::new(File::open(path)?))
}

/// Load a roster from any buffered reader.
///
/// # Errors
/// This method will error if reading fails.
pub fn from_reader(reader: impl BufRead) -> Result<Vec<String>> {
    let mut names = Vec::new();

    for line in reader.lines() {
        let line = line?;
        if let Some(name) = line.split(',').next() {
            let name = name.trim();
            if !name.is_empty() {
                names.push(name.to_string());
            }
        }
    }

    Ok(names)
}
