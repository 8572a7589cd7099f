//! Single-file operations: each is one best-effort native call (plus a
//! documented fallback), not a transaction.

use std::fs::{self, OpenOptions};
use std::io::ErrorKind;
use std::path::Path;

use host_platform::{Error, Result};

/// Create an empty regular file if none exists; an existing file is
/// left untouched.
pub fn create_file(path: &Path) -> Result<()> {
    OpenOptions::new()
        .append(true)
        .create(true)
        .open(path)
        .map(|_| ())
        .map_err(|e| Error::io(path, e))
}

/// Copy a regular file, replacing any existing destination.
pub fn copy_file(source: &Path, dest: &Path) -> Result<()> {
    fs::copy(source, dest)
        .map(|_| ())
        .map_err(|e| Error::io(dest, e))
}

/// Move a file by rename, falling back to copy-then-delete when the
/// destination is on a different filesystem.
pub fn move_file(source: &Path, dest: &Path) -> Result<()> {
    match fs::rename(source, dest) {
        Ok(()) => Ok(()),
        Err(e) if e.raw_os_error() == Some(libc::EXDEV) => {
            copy_file(source, dest)?;
            fs::remove_file(source).map_err(|e| Error::io(source, e))
        }
        Err(e) => Err(Error::io(source, e)),
    }
}

/// Delete a regular file. A missing file is already deleted.
pub fn delete_file(path: &Path) -> Result<()> {
    match fs::remove_file(path) {
        Ok(()) => Ok(()),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
        Err(e) => Err(Error::io(path, e)),
    }
}
