//! Source file discovery.
//!
//! Resolves the `--source`/`--filter`/`--recursive` trio into a concrete
//! list of files to process. A source that is itself a file is taken
//! verbatim (the filter does not apply); a directory is walked — one
//! level deep unless recursive — and file names are matched against the
//! wildcard pattern. Results are sorted so batch output is deterministic.

use glob::Pattern;
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("walk error: {0}")]
    Walk(#[from] walkdir::Error),
    #[error("invalid filter pattern: {0}")]
    BadPattern(#[from] glob::PatternError),
    #[error("source does not exist: {0}")]
    MissingSource(PathBuf),
}

/// Find the image files selected by a source path, wildcard filter, and
/// recursion flag.
pub fn find_images(source: &Path, filter: &str, recursive: bool) -> Result<Vec<PathBuf>, ScanError> {
    if source.is_file() {
        return Ok(vec![source.to_path_buf()]);
    }
    if !source.is_dir() {
        return Err(ScanError::MissingSource(source.to_path_buf()));
    }

    let pattern = Pattern::new(filter)?;
    let max_depth = if recursive { usize::MAX } else { 1 };

    let mut selected = Vec::new();
    for entry in WalkDir::new(source).max_depth(max_depth) {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let matches = entry
            .file_name()
            .to_str()
            .is_some_and(|name| pattern.matches(name));
        if matches {
            selected.push(entry.into_path());
        }
    }

    selected.sort();
    Ok(selected)
}
