//! File system helpers for the report writer.

use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::Path;

/// Creates the directory (and any missing parents) if it does not exist.
///
/// # Arguments
/// * `path` - Directory to ensure
pub fn ensure_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Appends `content` to the file at `path`, creating the file first if
/// needed. Existing content is never truncated.
///
/// # Arguments
/// * `path` - File to append to
/// * `content` - Text to append, written verbatim
pub fn append(path: &Path, content: &str) -> std::io::Result<()> {
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    file.write_all(content.as_bytes())
}
