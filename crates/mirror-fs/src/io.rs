//! Directory, file, and symlink operations
//!
//! The mirror is rebuilt destructively on every sync, so the primitive
//! here is full directory replacement rather than in-place editing.
//! None of these operations are transactional; a failure leaves the
//! tree partially rewritten and is surfaced with path context.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::{Error, Result};

/// Delete a directory tree and recreate it empty.
///
/// A missing directory is not an error; the result either way is an
/// empty directory at `dir`.
pub fn replace_dir(dir: &Path) -> Result<()> {
    match fs::remove_dir_all(dir) {
        Ok(()) => {}
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
        Err(e) => return Err(Error::io(dir, e)),
    }
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    debug!(dir = %dir.display(), "replaced directory");
    Ok(())
}

/// Write `content` to `path`, truncating any existing file.
pub fn write_file(path: &Path, content: &[u8]) -> Result<()> {
    fs::write(path, content).map_err(|e| Error::io(path, e))
}

/// Create a symbolic link at `link` pointing at `target`.
///
/// `target` is typically relative to the link's own directory.
pub fn create_symlink(target: &Path, link: &Path) -> Result<()> {
    symlink_impl(target, link).map_err(|e| Error::symlink(link, e))
}

#[cfg(unix)]
fn symlink_impl(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::unix::fs::symlink(target, link)
}

#[cfg(windows)]
fn symlink_impl(target: &Path, link: &Path) -> std::io::Result<()> {
    std::os::windows::fs::symlink_file(target, link)
}

/// List the entry names of a directory, sorted.
///
/// A missing directory yields an empty list: an absent installed or
/// mirror directory means "nothing there", not a failure.
pub fn list_entry_names(dir: &Path) -> Result<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Vec::new()),
        Err(e) => return Err(Error::io(dir, e)),
    };

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|e| Error::io(dir, e))?;
        names.push(entry.file_name().to_string_lossy().into_owned());
    }
    names.sort();
    Ok(names)
}

/// Whether `path` is a symlink whose target does not resolve.
pub fn is_broken_link(path: &Path) -> bool {
    path.symlink_metadata().is_ok_and(|m| m.is_symlink()) && !path.exists()
}
