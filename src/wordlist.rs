//! Wordlist and target-hash file loading.
//!
//! Both input files share the same format: UTF-8 text, one entry per line,
//! blank lines ignored.

use std::fs;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors raised while loading an input file
#[derive(Error, Debug)]
pub enum WordlistError {
    /// Input file does not exist
    #[error("file '{}' not found", path.display())]
    NotFound { path: PathBuf },

    /// Any other read failure (permissions, invalid UTF-8, ...)
    #[error("failed to read '{}': {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Load the ordered, trimmed, non-empty lines of a text file.
///
/// Line order is preserved; the caller relies on it to report the original
/// password for a matched digest.
pub fn load_lines(path: &Path) -> Result<Vec<String>, WordlistError> {
    if !path.exists() {
        return Err(WordlistError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path).map_err(|source| WordlistError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let lines: Vec<String> = content
        .lines()
        .map(|line| line.trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    Ok(lines)
}
